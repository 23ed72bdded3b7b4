use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;

/// Implemented by components that show ripple feedback
pub trait RippleHost {
    fn ripple_disabled(&self) -> bool;
    /// Element the waves originate from and are clipped to
    fn ripple_origin(&self) -> NodeRef<Div>;
}

/// Size and offset of a wave inside its origin, in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// The wave is centred on the pointer and reaches the farthest corner of the origin.
pub fn wave_geometry(width: f64, height: f64, x: f64, y: f64) -> WaveGeometry {
    let dx = x.max(width - x);
    let dy = y.max(height - y);
    let radius = (dx * dx + dy * dy).sqrt();
    WaveGeometry {
        size: radius * 2.0,
        left: x - radius,
        top: y - radius,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub id: u64,
    pub geometry: WaveGeometry,
    /// Released, fading out until removed
    pub leaving: bool,
}

impl Wave {
    pub fn style(&self) -> String {
        let g = self.geometry;
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = g.size,
            left = g.left,
            top = g.top
        )
    }
}

/// Waves of one component instance
#[derive(Clone, Copy)]
pub struct RippleController {
    waves: RwSignal<Vec<Wave>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl RippleController {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            waves: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn waves(&self) -> Vec<Wave> {
        self.waves.get()
    }

    /// Adds a wave at the pointer position (viewport coordinates).
    pub fn start_press(&self, host: &impl RippleHost, client_x: f64, client_y: f64) {
        if host.ripple_disabled() {
            return;
        }
        let Some(origin) = host.ripple_origin().get_untracked() else {
            return;
        };

        let rect = origin.get_bounding_client_rect();
        let geometry = wave_geometry(
            rect.width(),
            rect.height(),
            client_x - rect.x(),
            client_y - rect.y(),
        );

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::debug!("ripple: wave {} size={:.1}", id, geometry.size);

        self.waves.update(|waves| {
            waves.push(Wave {
                id,
                geometry,
                leaving: false,
            })
        });
    }

    /// Releases every active wave; released waves are dropped after the fade-out.
    pub fn end_press(&self) {
        let mut released = Vec::new();
        self.waves.update(|waves| {
            for wave in waves.iter_mut().filter(|w| !w.leaving) {
                wave.leaving = true;
                released.push(wave.id);
            }
        });
        if released.is_empty() {
            return;
        }

        let waves = self.waves;
        Timeout::new(self.duration_ms, move || {
            // The component may already be unmounted
            let _ = waves.try_update(|waves| waves.retain(|w| !released.contains(&w.id)));
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_from_center_covers_corners() {
        let g = wave_geometry(100.0, 40.0, 50.0, 20.0);
        let radius = (50.0f64 * 50.0 + 20.0 * 20.0).sqrt();
        assert!((g.size - radius * 2.0).abs() < 1e-9);
        assert!((g.left - (50.0 - radius)).abs() < 1e-9);
        assert!((g.top - (20.0 - radius)).abs() < 1e-9);
    }

    #[test]
    fn test_wave_from_corner_reaches_opposite_corner() {
        let g = wave_geometry(30.0, 40.0, 0.0, 0.0);
        assert!((g.size - 100.0).abs() < 1e-9);
        assert_eq!(g.left, -50.0);
        assert_eq!(g.top, -50.0);
    }

    #[test]
    fn test_wave_style() {
        let wave = Wave {
            id: 0,
            geometry: WaveGeometry {
                size: 10.0,
                left: -1.5,
                top: 2.0,
            },
            leaving: false,
        };
        assert_eq!(
            wave.style(),
            "width: 10px; height: 10px; left: -1.5px; top: 2px;"
        );
    }
}
