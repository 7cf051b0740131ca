mod backdrop;
mod hooks;
mod nav;
mod scene;
mod sections;

use crate::content::OWNER_NAME;
use crate::motion::LoadingProgress;
use crate::quality::{QualityTier, RenderSettings};
use backdrop::Backdrop;
use gloo_timers::callback::Interval;
use nav::{use_navigation, NavAction, NavigateTo, Navigation};
use scene::SceneCanvas;
use sections::{About, Contact, Hero, Projects, Skills};
use web_sys::window;
use yew::prelude::*;

const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;
const DEFAULT_CORES: u32 = 4;

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn resolve_settings() -> RenderSettings {
    let win = window();
    let width = win
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    // Browsers that hide the core count report 0.
    let cores = win
        .as_ref()
        .map(|w| w.navigator().hardware_concurrency())
        .filter(|cores| *cores >= 1.0)
        .map(|cores| cores as u32)
        .unwrap_or(DEFAULT_CORES);

    let tier = if prefers_reduced_motion() {
        QualityTier::Low
    } else {
        QualityTier::classify(width, cores)
    };
    log::info!(
        "quality tier {} (viewport {width}px, {cores} cores)",
        tier.as_str()
    );
    RenderSettings::for_tier(tier)
}

#[function_component(LoadingOverlay)]
fn loading_overlay() -> Html {
    let progress = use_state(LoadingProgress::default);

    {
        let progress = progress.clone();
        let complete = progress.is_complete();
        use_effect_with(complete, move |complete| {
            let ticker = (!*complete).then(|| {
                // Interval callbacks see the handle from this render only,
                // so count locally.
                let mut current = *progress;
                Interval::new(LoadingProgress::TICK_MS, move || {
                    current = current.advance();
                    progress.set(current);
                })
            });
            move || drop(ticker)
        });
    }

    if progress.is_complete() {
        return html! {};
    }

    html! {
        <div class="loading-overlay" role="status" aria-live="polite">
            <div class="loading-star" aria-hidden="true">{"۞"}</div>
            <p class="loading-name">{OWNER_NAME}</p>
            <div class="loading-bar">
                <div class="loading-bar-fill" style={format!("width: {}%;", progress.percent())} />
            </div>
            <p class="loading-percent">{format!("{}%", progress.percent())}</p>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let settings = use_memo((), |_| resolve_settings());
    let (model, navigate) = use_navigation();

    let on_toggle_menu = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    html! {
        <>
            <LoadingOverlay />
            <SceneCanvas settings={*settings} />
            <Backdrop />
            <Navigation
                state={model.state.clone()}
                navigate={navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <ContextProvider<NavigateTo> context={NavigateTo(navigate)}>
                <main class="site-main">
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <Contact />
                </main>
            </ContextProvider<NavigateTo>>
            <footer class="site-footer">
                <p>{format!("© {OWNER_NAME}")}</p>
            </footer>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
