use crate::motion::{Cycler, RevealLatch, Tilt, TiltProfile};
use crate::typewriter::{Phase, Typewriter};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.2;

/// `requestAnimationFrame` loop that runs until `frame` returns `false` or
/// the loop is dropped.
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    handle: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            callback: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.handle.set(None);
            }
            if frame(timestamp) {
                if let Some(inner) = weak.upgrade() {
                    inner.schedule();
                }
            }
        });
        *inner.callback.borrow_mut() = Some(callback);
        inner.schedule();
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }
}

impl FrameLoopInner {
    fn schedule(&self) {
        let Some(win) = window() else {
            return;
        };
        if let Some(callback) = self.callback.borrow().as_ref() {
            match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(error) => log::warn!("requestAnimationFrame failed: {error:?}"),
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.inner.handle.take() {
            if let Some(win) = window() {
                let _ = win.cancel_animation_frame(id);
            }
        }
        self.inner.callback.borrow_mut().take();
    }
}

/// Whether the element behind `node` has entered the viewport. With `once`
/// the result latches; otherwise it follows visibility.
#[hook]
pub fn use_reveal(node: NodeRef, once: bool) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let latch = Rc::new(RefCell::new(RevealLatch::new(once)));
            let observer = node.cast::<Element>().and_then(|element| {
                let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        latch.borrow_mut().observe(entry.is_intersecting());
                    }
                    revealed.set(latch.borrow().revealed());
                });
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .map_err(|error| log::debug!("IntersectionObserver unavailable: {error:?}"))
                .ok()?;
                observer.observe(&element);
                Some((observer, callback))
            });

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    *revealed
}

/// Pointer-driven card tilt. Returns the current tilt plus `mousemove` and
/// `mouseleave` handlers for the card element.
#[hook]
pub fn use_tilt(profile: TiltProfile) -> (Tilt, Callback<MouseEvent>, Callback<MouseEvent>) {
    let tilt = use_state(|| Tilt::NEUTRAL);

    let on_move = {
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let dx = f64::from(event.client_x()) - (rect.left() + rect.width() / 2.0);
            let dy = f64::from(event.client_y()) - (rect.top() + rect.height() / 2.0);
            tilt.set(profile.tilt(dx, dy));
        })
    };

    let on_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_| tilt.set(Tilt::NEUTRAL))
    };

    (*tilt, on_move, on_leave)
}

/// Index into a list of `len` items, advancing every `period_ms`.
#[hook]
pub fn use_cycle(len: usize, period_ms: u32) -> usize {
    let cycler = use_mut_ref(|| Cycler::new(len));
    let update = use_force_update();

    {
        let cycler = cycler.clone();
        use_effect_with((len, period_ms), move |(len, period_ms)| {
            *cycler.borrow_mut() = Cycler::new(*len);
            let interval = Interval::new(*period_ms, move || {
                let next = cycler.borrow().advance();
                *cycler.borrow_mut() = next;
                update.force_update();
            });
            move || drop(interval)
        });
    }

    let index = cycler.borrow().index();
    index
}

/// Drives a [`Typewriter`] with one pending timeout at a time and returns
/// the visible text, the current title index and the phase.
#[hook]
pub fn use_typewriter<F>(titles: F) -> (String, usize, Phase)
where
    F: FnOnce() -> Vec<&'static str>,
{
    let writer = use_mut_ref(|| Typewriter::new(titles()));
    let next_delay = use_mut_ref(|| crate::typewriter::TYPE_INTERVAL);
    let step = use_state(|| 0_u64);

    {
        let writer = writer.clone();
        let next_delay = next_delay.clone();
        let step = step.clone();
        use_effect_with(*step, move |current| {
            let current = *current;
            let delay_ms = u32::try_from(next_delay.borrow().as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(delay_ms, move || {
                let delay = writer.borrow_mut().tick();
                *next_delay.borrow_mut() = delay;
                step.set(current + 1);
            });
            move || drop(timeout)
        });
    }

    let writer = writer.borrow();
    (writer.text(), writer.index(), writer.phase())
}
