use super::use_section_classes;
use crate::content::{ProjectRecord, PROJECTS};
use crate::motion::FlipCard;
use crate::navigation::SectionId;
use yew::prelude::*;

const FRONT_TECHNOLOGIES: usize = 4;
const FRONT_FEATURES: usize = 2;

fn chips(items: &[&'static str], class: &'static str) -> Html {
    html! {
        <ul class="chip-list">
            { for items.iter().map(|item| html! { <li key={*item} class={classes!("chip", class)}>{*item}</li> }) }
        </ul>
    }
}

fn project_links(project: &ProjectRecord) -> Html {
    html! {
        <div class="project-links">
            <a
                class="button button-primary"
                href={project.live_url}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Live Demo"}
            </a>
            <a
                class="button button-outline"
                href={project.github_url}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"GitHub"}
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let card = use_state(FlipCard::default);
    let project = props.project;

    let on_details = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| card.set(card.show_details()))
    };
    let on_close = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| card.set(card.close()))
    };
    let flipped = card.is_flipped();

    let front_tech = &project.technologies[..project.technologies.len().min(FRONT_TECHNOLOGIES)];
    let front_features = &project.features[..project.features.len().min(FRONT_FEATURES)];

    html! {
        <article class={classes!("flip-card", flipped.then_some("is-flipped"))}>
            <div class="flip-card-inner">
                <div class="flip-card-face flip-card-front">
                    <div class="project-image" style={format!("background-image: url('{}');", project.image)}>
                        <span class="project-status">{project.status}</span>
                        <span class="project-category">{project.category}</span>
                    </div>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-period">{project.period}</p>
                    <p class="project-impact">{project.impact}</p>
                    {chips(front_tech, "chip-tech")}
                    <ul class="project-features">
                        { for front_features.iter().map(|feature| html! { <li key={*feature}>{*feature}</li> }) }
                    </ul>
                    <button
                        class="button button-outline flip-toggle"
                        type="button"
                        aria-expanded={flipped.to_string()}
                        onclick={on_details}
                    >
                        {"Details"}
                    </button>
                </div>

                <div class="flip-card-face flip-card-back">
                    <button
                        class="flip-close"
                        type="button"
                        aria-label={format!("Close {} details", project.title)}
                        onclick={on_close}
                    >
                        {"✕"}
                    </button>
                    <h3 class="project-title">{project.title}</h3>
                    <ul class="project-description">
                        { for project.description.iter().map(|line| html! { <li key={*line}>{*line}</li> }) }
                    </ul>
                    <h4>{"Technologies"}</h4>
                    {chips(project.technologies, "chip-tech")}
                    <h4>{"Features"}</h4>
                    {chips(project.features, "chip-feature")}
                    {project_links(project)}
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let node = use_node_ref();
    let class = use_section_classes(node.clone(), "projects");

    html! {
        <section id={SectionId::Projects.as_str()} ref={node} class={class}>
            <header class="section-header">
                <h2 class="section-title">{"Featured Projects"}</h2>
                <p class="section-lead">{"A selection of things I have built."}</p>
            </header>
            <div class="project-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <ProjectCard key={project.title} project={project} />
                }) }
            </div>
        </section>
    }
}
