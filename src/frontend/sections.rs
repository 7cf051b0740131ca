mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use super::hooks::{use_reveal, use_tilt};
use crate::content::{RESUME_PATH, SOCIAL_LINKS};
use crate::motion::{stagger, TiltProfile};
use yew::prelude::*;

/// Class list for a section root, adding `is-revealed` once it has scrolled
/// into view.
#[hook]
fn use_section_classes(node: NodeRef, base: &'static str) -> Classes {
    let revealed = use_reveal(node, true);
    classes!("section", base, "reveal", revealed.then_some("is-revealed"))
}

fn staggered(text: &str, step_secs: f64) -> Html {
    html! {
        <>
            { for stagger(text, step_secs).into_iter().map(|c| html! {
                <span class="stagger-char" style={format!("animation-delay: {:.2}s;", c.delay_secs)}>
                    {c.glyph.to_string()}
                </span>
            }) }
        </>
    }
}

#[function_component(SocialLinks)]
fn social_links() -> Html {
    html! {
        <ul class="social-links">
            { for SOCIAL_LINKS.iter().map(|link| html! {
                <li key={link.name}>
                    <a
                        class="social-link"
                        href={link.url}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.name}
                        title={link.name}
                    >
                        <span aria-hidden="true">{link.icon}</span>
                    </a>
                </li>
            }) }
        </ul>
    }
}

#[function_component(ResumeLink)]
fn resume_link() -> Html {
    html! {
        <a class="button button-outline" href={RESUME_PATH} download="">
            <span aria-hidden="true">{"⬇"}</span>
            {" Download CV"}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    pub profile: TiltProfile,
    #[prop_or_default]
    pub class: Classes,
    pub children: Html,
}

/// Card that leans toward the pointer.
#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let (tilt, on_move, on_leave) = use_tilt(props.profile);
    html! {
        <div
            class={classes!("card", props.class.clone())}
            style={tilt.style()}
            onmousemove={on_move}
            onmouseleave={on_leave}
        >
            { props.children.clone() }
        </div>
    }
}
