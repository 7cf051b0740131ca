use super::super::hooks::{use_tilt, use_typewriter};
use super::super::nav::NavigateTo;
use super::{staggered, use_section_classes, ResumeLink, SocialLinks};
use crate::content::{HERO_TITLES, OWNER_NAME, PROFESSIONAL_SUMMARY};
use crate::motion::{CursorTrail, GLITCH_MS, GLITCH_PERIOD_MS, HERO_TILT};
use crate::navigation::SectionId;
use crate::typewriter::Phase;
use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

const SUMMARY_STAGGER_SECS: f64 = 0.03;

/// (glyph, tint, drift delay in seconds, placement)
const FLOATING_ICONS: &[(&str, &str, f64, &str)] = &[
    ("</>", "tint-turquoise", 0.0, "float-a"),
    ("🚀", "tint-green", 0.5, "float-b"),
    ("☀", "tint-gold", 1.0, "float-c"),
    ("✦", "tint-light", 1.5, "float-d"),
    ("</>", "tint-turquoise", 2.0, "float-e"),
    ("🚀", "tint-green", 2.5, "float-f"),
    ("☀", "tint-gold", 3.0, "float-g"),
    ("✦", "tint-light", 3.5, "float-h"),
];

#[function_component(CursorTrailLayer)]
fn cursor_trail_layer() -> Html {
    let trail = use_mut_ref(CursorTrail::default);
    let update = use_force_update();

    {
        let trail = trail.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let trail = trail.clone();
                EventListener::new(&win, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        trail
                            .borrow_mut()
                            .push(f64::from(event.client_x()), f64::from(event.client_y()));
                    }
                })
            });
            let fade = Interval::new(CursorTrail::TICK_MS, move || {
                let mut trail = trail.borrow_mut();
                if trail.is_empty() {
                    return;
                }
                trail.fade();
                drop(trail);
                update.force_update();
            });
            move || {
                drop(listener);
                drop(fade);
            }
        });
    }

    let trail = trail.borrow();
    html! {
        <div class="cursor-trail" aria-hidden="true">
            { for trail.particles().iter().map(|particle| html! {
                <div
                    key={particle.id}
                    class="trail-particle"
                    style={format!(
                        "left: {:.0}px; top: {:.0}px; opacity: {:.2}; transform: scale({:.2});",
                        particle.x - 4.0,
                        particle.y - 4.0,
                        particle.life,
                        particle.life,
                    )}
                />
            }) }
        </div>
    }
}

/// True for `GLITCH_MS` at the start of every glitch period.
#[hook]
fn use_glitch() -> bool {
    let active = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let interval = {
                let pending = pending.clone();
                Interval::new(GLITCH_PERIOD_MS, move || {
                    active.set(true);
                    let active = active.clone();
                    *pending.borrow_mut() = Some(Timeout::new(GLITCH_MS, move || active.set(false)));
                })
            };
            move || {
                drop(interval);
                pending.borrow_mut().take();
            }
        });
    }

    *active
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let class = use_section_classes(node.clone(), "hero");
    let (title, index, phase) = use_typewriter(|| HERO_TITLES.iter().map(|(text, _, _)| *text).collect());
    let glitching = use_glitch();
    let (tilt, on_move, on_leave) = use_tilt(HERO_TILT);
    let navigate = use_context::<NavigateTo>();

    let (from, to) = HERO_TITLES
        .get(index)
        .map(|(_, from, to)| (*from, *to))
        .unwrap_or(("#c9a961", "#4a9d9c"));

    let on_view_projects = Callback::from(move |_: MouseEvent| {
        if let Some(NavigateTo(navigate)) = &navigate {
            navigate.emit(SectionId::Projects);
        }
    });

    html! {
        <>
            <CursorTrailLayer />
            <section
                id={SectionId::Home.as_str()}
                ref={node}
                class={class}
                onmousemove={on_move}
                onmouseleave={on_leave}
            >
                <div class="floating-icons" aria-hidden="true">
                    { for FLOATING_ICONS.iter().map(|(glyph, tint, delay, place)| html! {
                        <span
                            class={classes!("floating-icon", *tint, *place)}
                            style={format!("animation-delay: {delay:.1}s;")}
                        >
                            {*glyph}
                        </span>
                    }) }
                </div>

                <div class="hero-content" style={tilt.style()}>
                    <div class="hero-name-wrap">
                        <h1 class={classes!("hero-name", glitching.then_some("is-glitching"))} data-text={OWNER_NAME}>
                            {OWNER_NAME}
                        </h1>
                        <div class="hero-underline" />
                    </div>

                    <p
                        class="hero-title"
                        style={format!("background-image: linear-gradient(90deg, {from}, {to});")}
                    >
                        {title}
                        <span
                            class={classes!("typewriter-caret", (phase == Phase::Pausing).then_some("is-blinking"))}
                            aria-hidden="true"
                        >
                            {"|"}
                        </span>
                    </p>

                    <p class="hero-summary">{staggered(PROFESSIONAL_SUMMARY, SUMMARY_STAGGER_SECS)}</p>

                    <div class="hero-actions">
                        <button class="button button-primary" type="button" onclick={on_view_projects}>
                            <span aria-hidden="true">{"🚀"}</span>
                            {" View Projects"}
                        </button>
                        <ResumeLink />
                    </div>

                    <SocialLinks />
                </div>

                <div class="scroll-indicator" aria-hidden="true">{"⌄"}</div>
            </section>
        </>
    }
}
