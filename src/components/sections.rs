use yew::prelude::*;

use super::reveal::Reveal;
use crate::model::{Project, SectionId, SkillCategory, TimelineEntry};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub paragraphs: Vec<String>,
    pub location: String,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="section">
            <Reveal class={classes!("section-header")}>
                <h2>{ "About Me" }</h2>
            </Reveal>
            <div class="about-content">
                <Reveal class={classes!("about-image")}>
                    <div class="about-portrait" aria-hidden="true"></div>
                </Reveal>
                <Reveal class={classes!("about-text")}>
                    { for props.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
                    <p class="about-location">{ format!("Based in {}", props.location) }</p>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    pub name: String,
}

/// Individual skill chip that lifts while hovered.
#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let hovered = use_state(|| false);
    let enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let style = if *hovered {
        "transform: translateY(-10px) scale(1.05);"
    } else {
        "transform: translateY(0) scale(1);"
    };
    html! {
        <div class="skill-card" {style} onmouseenter={enter} onmouseleave={leave}>
            { &props.name }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub categories: Vec<SkillCategory>,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id={SectionId::Skills.anchor()} class="section">
            <Reveal class={classes!("section-header")}>
                <h2>{ "Skills" }</h2>
            </Reveal>
            <div class="skills-grid">
                { for props.categories.iter().enumerate().map(|(i, cat)| html! {
                    <Reveal class={classes!("skill-category")} delay_ms={i as u32 * 200}>
                        <h3>{ &cat.name }</h3>
                        <div class="skill-cards">
                            { for cat.skills.iter().map(|s| html! {
                                <SkillCard name={s.clone()} />
                            }) }
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id={SectionId::Projects.anchor()} class="section">
            <Reveal class={classes!("section-header")}>
                <h2>{ "Projects" }</h2>
            </Reveal>
            <div class="projects-grid">
                { for props.projects.iter().enumerate().map(|(i, project)| html! {
                    <Reveal class={classes!("project-card")} delay_ms={i as u32 * 200}>
                        <h3>{ &project.title }</h3>
                        <p>{ &project.description }</p>
                        <div class="project-tags">
                            { for project.tags.iter().map(|t| html! {
                                <span class="project-tag">{ t }</span>
                            }) }
                        </div>
                        if let Some(link) = &project.link {
                            <a class="project-link" href={link.clone()} target="_blank">
                                { "View project" }
                            </a>
                        }
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: Vec<TimelineEntry>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <section id={SectionId::Experience.anchor()} class="section">
            <Reveal class={classes!("section-header")}>
                <h2>{ "Experience" }</h2>
            </Reveal>
            <div class="timeline">
                { for props.entries.iter().enumerate().map(|(i, entry)| html! {
                    <Reveal class={classes!("timeline-item")} delay_ms={i as u32 * 300}>
                        <span class="timeline-period">{ &entry.period }</span>
                        <h3>{ &entry.title }</h3>
                        <p class="timeline-org">{ &entry.organization }</p>
                        <p>{ &entry.summary }</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
