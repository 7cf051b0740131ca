use crate::backdrop::{self, PointerGlow, GLOW_THROTTLE_MS};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

fn viewport() -> (f64, f64) {
    let Some(win) = window() else {
        return (1.0, 1.0);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width, height)
}

/// Fixed layer of drifting shapes and particles with a pointer glow.
#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let layout = use_memo((), |_| {
        let mut rng = fastrand::Rng::new();
        (backdrop::generate_shapes(&mut rng), backdrop::generate_particles(&mut rng))
    });
    let glow = use_state(PointerGlow::default);

    {
        let glow = glow.clone();
        use_effect_with((), move |_| {
            let latest = Rc::new(Cell::new((0.0, 0.0)));
            let waiting = Rc::new(Cell::new(false));
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

            let listener = window().map(|win| {
                let pending = pending.clone();
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    latest.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    if waiting.replace(true) {
                        return;
                    }
                    let glow = glow.clone();
                    let latest = latest.clone();
                    let waiting = waiting.clone();
                    *pending.borrow_mut() = Some(Timeout::new(GLOW_THROTTLE_MS, move || {
                        let (x, y) = latest.get();
                        let (width, height) = viewport();
                        glow.set(PointerGlow::from_client(x, y, width, height));
                        waiting.set(false);
                    }));
                })
            });

            move || {
                drop(listener);
                pending.borrow_mut().take();
            }
        });
    }

    let (shapes, particles) = &*layout;

    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-glow" style={glow.style()} />
            { for shapes.iter().map(|shape| html! {
                <div class={classes!("ambient-shape", shape.kind.class(), shape.tint.class())} style={shape.style()} />
            }) }
            { for particles.iter().map(|particle| html! {
                <div
                    key={particle.id}
                    class={classes!("ambient-particle", particle.tint.class())}
                    style={particle.style()}
                />
            }) }
            <div class="backdrop-grid" />
        </div>
    }
}
