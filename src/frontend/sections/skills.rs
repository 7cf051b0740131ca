use super::super::hooks::use_tilt;
use super::use_section_classes;
use crate::content::{scheme_for, CategoryScheme, SKILLS};
use crate::motion::SKILL_BUBBLE_TILT;
use crate::navigation::SectionId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SkillBubbleProps {
    name: &'static str,
    scheme: CategoryScheme,
    index: usize,
}

#[function_component(SkillBubble)]
fn skill_bubble(props: &SkillBubbleProps) -> Html {
    let hovered = use_state(|| false);
    let (tilt, on_move, on_leave) = use_tilt(SKILL_BUBBLE_TILT);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |event: MouseEvent| {
            hovered.set(false);
            on_leave.emit(event);
        })
    };

    html! {
        <li
            class={classes!("skill-bubble", props.scheme.class, hovered.then_some("is-hovered"))}
            style={format!(
                "{} --accent: {}; animation-delay: {:.2}s;",
                tilt.style(),
                props.scheme.accent,
                props.index as f64 * 0.05,
            )}
            onmouseenter={on_enter}
            onmousemove={on_move}
            onmouseleave={on_leave}
        >
            if *hovered {
                <span class="skill-icon" aria-hidden="true">{props.scheme.icon}</span>
            }
            <span class="skill-name">{props.name}</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryBlockProps {
    name: &'static str,
    skills: &'static [&'static str],
}

#[function_component(CategoryBlock)]
fn category_block(props: &CategoryBlockProps) -> Html {
    let scheme = scheme_for(props.name);
    html! {
        <div class={classes!("skill-category", scheme.class)}>
            <header class="skill-category-header">
                <span class="skill-category-icon" aria-hidden="true">{scheme.icon}</span>
                <h3 class="skill-category-title">{props.name}</h3>
                <span class="skill-count">{format!("{} skills", props.skills.len())}</span>
            </header>
            <ul class="skill-bubbles">
                { for props.skills.iter().enumerate().map(|(index, name)| html! {
                    <SkillBubble key={*name} name={*name} scheme={scheme} index={index} />
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let node = use_node_ref();
    let class = use_section_classes(node.clone(), "skills");

    html! {
        <section id={SectionId::Skills.as_str()} ref={node} class={class}>
            <header class="section-header">
                <h2 class="section-title">{"Skills & Expertise"}</h2>
                <p class="section-lead">
                    {"Technologies and tools I use to bring ideas to life."}
                </p>
            </header>
            <div class="skill-categories">
                { for SKILLS.iter().map(|(name, skills)| html! {
                    <CategoryBlock key={*name} name={*name} skills={*skills} />
                }) }
            </div>
        </section>
    }
}
