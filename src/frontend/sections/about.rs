use super::super::hooks::use_cycle;
use super::{staggered, use_section_classes, TiltCard};
use crate::content::{COMPETENCIES, EDUCATION, TIMELINE};
use crate::motion::{TimeOfDay, ABOUT_CARD_TILT};
use crate::navigation::SectionId;
use yew::prelude::*;

const COMPETENCY_STAGGER_SECS: f64 = 0.02;
const TIMELINE_PERIOD_MS: u32 = 3000;

#[function_component(Timeline)]
fn timeline() -> Html {
    let active = use_cycle(TIMELINE.len(), TIMELINE_PERIOD_MS);

    html! {
        <ol class="timeline">
            { for TIMELINE.iter().enumerate().map(|(index, item)| {
                let state = match index.cmp(&active) {
                    std::cmp::Ordering::Less => "is-past",
                    std::cmp::Ordering::Equal => "is-active",
                    std::cmp::Ordering::Greater => "is-upcoming",
                };
                html! {
                    <li key={index} class={classes!("timeline-item", state)}>
                        <span class="timeline-icon" aria-hidden="true">{item.icon}</span>
                        <div class="timeline-body">
                            <span class="timeline-year">{item.year}</span>
                            <span class="timeline-event">{item.event}</span>
                        </div>
                    </li>
                }
            }) }
        </ol>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let class = use_section_classes(node.clone(), "about");
    let time_of_day = use_memo((), |_| TimeOfDay::from_hour(js_sys::Date::new_0().get_hours()));
    let greeting = match *time_of_day {
        TimeOfDay::Day => ("☀", "Good day"),
        TimeOfDay::Night => ("☾", "Good evening"),
    };

    html! {
        <section id={SectionId::About.as_str()} ref={node} class={classes!(class, time_of_day.class())}>
            <header class="section-header">
                <p class="section-greeting">
                    <span aria-hidden="true">{greeting.0}</span>
                    {" "}{greeting.1}
                </p>
                <h2 class="section-title">{"About Me"}</h2>
                <p class="section-lead">
                    {"A journey through code, creativity and continuous learning."}
                </p>
            </header>

            <div class="about-grid">
                <TiltCard profile={ABOUT_CARD_TILT} class="education-card">
                    <h3 class="card-title">
                        <span aria-hidden="true">{"🎓"}</span>{" Education"}
                    </h3>
                    <h4 class="education-degree">{EDUCATION.degree}</h4>
                    <ul class="education-facts">
                        <li>{EDUCATION.institution}</li>
                        <li>{EDUCATION.location}</li>
                        <li>{EDUCATION.period}</li>
                        <li>{EDUCATION.details}</li>
                    </ul>
                    <h5 class="coursework-title">{"Key Coursework"}</h5>
                    <ul class="chip-list">
                        { for EDUCATION.coursework.iter().map(|course| html! {
                            <li key={*course} class="chip">{*course}</li>
                        }) }
                    </ul>
                </TiltCard>

                <TiltCard profile={ABOUT_CARD_TILT} class="competencies-card">
                    <h3 class="card-title">
                        <span aria-hidden="true">{"◎"}</span>{" Core Competencies"}
                    </h3>
                    <ul class="competencies">
                        { for COMPETENCIES.iter().map(|competency| html! {
                            <li key={*competency} class="competency">
                                {staggered(competency, COMPETENCY_STAGGER_SECS)}
                            </li>
                        }) }
                    </ul>
                </TiltCard>
            </div>

            <div class="timeline-wrap">
                <h3 class="card-title">{"My Journey"}</h3>
                <Timeline />
            </div>
        </section>
    }
}
