use super::hooks::FrameLoop;
use crate::content::{OWNER_INITIALS, OWNER_NAME};
use crate::navigation::{NavState, ScrollAnimation, ScrollSnapshot, SectionId};
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

/// Handed to sections so their buttons can scroll to another section.
#[derive(Clone, PartialEq)]
pub struct NavigateTo(pub Callback<SectionId>);

pub enum NavAction {
    Scrolled(ScrollSnapshot),
    Navigate {
        target: SectionId,
        current_scroll: f64,
        offset_top: f64,
    },
    ToggleMenu,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavModel {
    pub state: NavState,
    /// Latest requested scroll, tagged so repeated targets restart it.
    pub animation: Option<(u64, ScrollAnimation)>,
}

impl Reducible for NavModel {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(snapshot) => Self {
                state: self.state.on_scroll(&snapshot),
                animation: self.animation,
            },
            NavAction::Navigate {
                target,
                current_scroll,
                offset_top,
            } => {
                let (state, animation) = self.state.navigate(target, current_scroll, offset_top);
                let sequence = self.animation.map(|(sequence, _)| sequence + 1).unwrap_or(0);
                Self {
                    state,
                    animation: Some((sequence, animation)),
                }
            }
            NavAction::ToggleMenu => Self {
                state: self.state.toggle_menu(),
                animation: self.animation,
            },
        };
        Rc::new(next)
    }
}

fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn section_offset(section: SectionId) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(section.as_str())?;
    Some(element.get_bounding_client_rect().top() + scroll_y())
}

fn sample_scroll() -> Option<ScrollSnapshot> {
    let win = window()?;
    let root = win.document()?.document_element()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let offsets = SectionId::ALL
        .into_iter()
        .filter_map(|section| section_offset(section).map(|top| (section, top)))
        .collect();

    Some(ScrollSnapshot {
        scroll_y: scroll_y(),
        scroll_height: f64::from(root.scroll_height()),
        viewport_height,
        offsets,
    })
}

/// Owns the navigation state: a passive scroll listener coalesced to one
/// update per animation frame, and the eased scroll for explicit navigation.
#[hook]
pub fn use_navigation() -> (UseReducerHandle<NavModel>, Callback<SectionId>) {
    let model = use_reducer(NavModel::default);

    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
            let listener = window().map(|win| {
                let pending = pending.clone();
                EventListener::new(&win, "scroll", move |_| {
                    let busy = pending.borrow().as_ref().is_some_and(FrameLoop::is_running);
                    if busy {
                        return;
                    }
                    let dispatcher = dispatcher.clone();
                    *pending.borrow_mut() = Some(FrameLoop::start(move |_| {
                        if let Some(snapshot) = sample_scroll() {
                            dispatcher.dispatch(NavAction::Scrolled(snapshot));
                        }
                        false
                    }));
                })
            });

            move || {
                drop(listener);
                pending.borrow_mut().take();
            }
        });
    }

    {
        use_effect_with(model.animation, move |animation| {
            let running = animation.map(|(_, animation)| {
                let mut started_at: Option<f64> = None;
                FrameLoop::start(move |timestamp| {
                    let start = *started_at.get_or_insert(timestamp);
                    let elapsed = timestamp - start;
                    if let Some(win) = window() {
                        win.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
                    }
                    !animation.is_finished(elapsed)
                })
            });
            move || drop(running)
        });
    }

    let navigate = {
        let dispatcher = model.dispatcher();
        Callback::from(move |target: SectionId| {
            let Some(offset_top) = section_offset(target) else {
                log::debug!("section #{} not found", target.as_str());
                return;
            };
            dispatcher.dispatch(NavAction::Navigate {
                target,
                current_scroll: scroll_y(),
                offset_top,
            });
        })
    };

    (model, navigate)
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub state: NavState,
    pub navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let state = &props.state;
    let link = |section: SectionId, class: &'static str| {
        let navigate = props.navigate.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigate.emit(section);
        });
        html! {
            <a
                key={section.as_str()}
                class={classes!(class, (state.active == section).then_some("is-active"))}
                href={format!("#{}", section.as_str())}
                aria-current={(state.active == section).then_some("page")}
                onclick={onclick}
            >
                <span class="nav-icon" aria-hidden="true">{section.icon()}</span>
                <span class="nav-label">{section.label()}</span>
            </a>
        }
    };

    let on_toggle = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_| on_toggle_menu.emit(()))
    };
    let on_connect = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(SectionId::Contact))
    };
    let on_scroll_top = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(SectionId::Home))
    };

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", state.progress)} />
            <header class="site-header">
                <nav class="site-nav" aria-label="Primary">
                    <a class="brand" href="#home" aria-label={OWNER_NAME}>
                        <span class="brand-mark" aria-hidden="true">{"۞"}</span>
                        <span class="brand-initials">{OWNER_INITIALS}</span>
                    </a>
                    <div class="nav-links">
                        { for SectionId::ALL.into_iter().map(|section| link(section, "nav-link")) }
                    </div>
                    <button class="connect-button" type="button" onclick={on_connect}>
                        {"Let's Connect"}
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={if state.menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={state.menu_open.to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{if state.menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </nav>
                <div class={classes!("mobile-menu", state.menu_open.then_some("is-open"))}>
                    { for SectionId::ALL.into_iter().map(|section| link(section, "mobile-link")) }
                </div>
            </header>
            <div class="section-dots" aria-hidden="true">
                { for SectionId::ALL.into_iter().map(|section| {
                    let navigate = props.navigate.clone();
                    html! {
                        <button
                            key={section.as_str()}
                            type="button"
                            tabindex="-1"
                            class={classes!("section-dot", (state.active == section).then_some("is-active"))}
                            title={section.label()}
                            onclick={Callback::from(move |_| navigate.emit(section))}
                        />
                    }
                }) }
            </div>
            if state.shows_scroll_top() {
                <button class="scroll-top" type="button" aria-label="Scroll to top" onclick={on_scroll_top}>
                    {"↑"}
                </button>
            }
        </>
    }
}

