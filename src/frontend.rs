use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, PointerEvent, SubmitEvent, TouchEvent};
use yew::prelude::*;

use crate::anchor::{self, NavOutcome};
use crate::config::MotionConfig;
use crate::contact::ContactButton;
use crate::content::{parse_project_id, LoopVariant, ProjectRecord, SiteContent, SkillRecord};
use crate::dom::{self, BrowserViewport};
use crate::geometry::PointerSample;
use crate::header::ScrollHeader;
use crate::logging::{log_event, LogLevel};
use crate::modal::{ModalView, ModalVisual, ProjectModal};
use crate::particles;
use crate::reveal::{RevealEffect, RevealKind, REVEAL_CLASS};
use crate::ripple::RippleState;
use crate::skills::{bar_style, fill_percent, SkillBars};
use crate::tilt::CardTilt;

const TIMELINE: &[(&str, &str)] = &[
    ("2025", "Leading motion systems for product launches and interactive campaigns."),
    ("2023", "Built data-heavy dashboards where animation carries meaning."),
    ("2021", "Prototyped touch-first interactions for mobile product teams."),
];

fn load_content(config: &MotionConfig) -> SiteContent {
    SiteContent::bundled().unwrap_or_else(|error| {
        log_event(
            config,
            LogLevel::Warn,
            "content_load_failed",
            json!({ "error": error.to_string() }),
        );
        SiteContent::empty()
    })
}

fn navigate_in_page(config: &MotionConfig, href: &str) -> bool {
    let outcome = anchor::navigate(&BrowserViewport, config, href);
    if let NavOutcome::Scrolled { top } = outcome {
        log_event(
            config,
            LogLevel::Debug,
            "anchor_navigated",
            json!({ "href": href, "top": top }),
        );
    }
    outcome.prevents_default()
}

fn pointer_sample(event: &PointerEvent) -> PointerSample {
    PointerSample::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

#[derive(Clone)]
struct ModalStore {
    config: MotionConfig,
    content: Rc<SiteContent>,
    modal: ProjectModal,
}

enum ModalAction {
    Open { id: u32, snippet: Option<LoopVariant> },
    Close,
    Key(String),
}

impl Reducible for ModalStore {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let changed = match action {
            ModalAction::Open { id, snippet } => {
                let opened = next.modal.open(&next.content, id, snippet);
                let event = if opened { "modal_opened" } else { "project_unknown" };
                log_event(&next.config, LogLevel::Debug, event, json!({ "projectId": id }));
                opened
            }
            ModalAction::Close => next.modal.close(),
            ModalAction::Key(key) => next.modal.handle_key(&key),
        };

        if !changed {
            return self;
        }
        if !next.modal.is_open() {
            log_event(&next.config, LogLevel::Debug, "modal_closed", json!({}));
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    href: AttrValue,
    label: AttrValue,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();

    let onclick = {
        let href = props.href.clone();
        Callback::from(move |event: MouseEvent| {
            if navigate_in_page(&config, &href) {
                event.prevent_default();
            }
        })
    };

    html! {
        <a href={props.href.clone()} onclick={onclick}>{props.label.clone()}</a>
    }
}

#[derive(Properties, PartialEq)]
struct SiteHeaderProps {
    hidden: bool,
}

#[function_component(SiteHeader)]
fn site_header(props: &SiteHeaderProps) -> Html {
    html! {
        <header class={classes!("site-header", props.hidden.then_some("hidden"))}>
            <NavLink href="#top" label="Portfolio" />
            <nav aria-label="Sections">
                <NavLink href="#projects" label="Work" />
                <NavLink href="#about" label="About" />
                <NavLink href="#contact" label="Contact" />
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct RippleButtonProps {
    #[prop_or_default]
    id: Option<AttrValue>,
    class: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("button"))]
    kind: AttrValue,
    #[prop_or_default]
    disabled: bool,
    #[prop_or_default]
    style: Option<AttrValue>,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
}

#[function_component(RippleButton)]
fn ripple_button(props: &RippleButtonProps) -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let button_ref = use_node_ref();
    let ripple = use_mut_ref(RippleState::default);
    let trigger = use_force_update();

    let onpointerdown = {
        let button_ref = button_ref.clone();
        let ripple = ripple.clone();
        let trigger = trigger.clone();
        Callback::from(move |event: PointerEvent| {
            let Some(button) = button_ref.cast::<Element>() else {
                return;
            };
            let token = ripple
                .borrow_mut()
                .press(dom::element_rect(&button), pointer_sample(&event));
            trigger.force_update();

            let ripple = ripple.clone();
            let trigger = trigger.clone();
            Timeout::new(config.ripple_ms, move || {
                if ripple.borrow_mut().release(token) {
                    trigger.force_update();
                }
            })
            .forget();
        })
    };

    let state = *ripple.borrow();

    html! {
        <button
            ref={button_ref}
            id={props.id.clone()}
            type={props.kind.clone()}
            class={classes!(props.class.to_string(), state.is_pressed().then_some("is-pressed"))}
            disabled={props.disabled}
            style={props.style.clone()}
            onpointerdown={onpointerdown}
            onclick={props.onclick.clone()}
        >
            <span class="btn-label">{props.label.clone()}</span>
            <span class="btn-ripple" style={state.style()} aria-hidden="true"></span>
        </button>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let particles =
        use_state(|| particles::generate(&mut fastrand::Rng::new(), config.particle_count));

    let on_view_work = Callback::from(move |_: MouseEvent| {
        navigate_in_page(&config, "#projects");
    });
    let on_contact = Callback::from(move |_: MouseEvent| {
        navigate_in_page(&config, "#contact");
    });

    html! {
        <section id="top" class="hero">
            <div id="heroParticles" class="hero-particles" aria-hidden="true">
                { for particles.iter().map(|particle| html! {
                    <div class="hero-particle" style={particle.style()}></div>
                })}
            </div>
            <div class="hero-copy">
                <p class="eyebrow">{"Motion-focused front-end developer"}</p>
                <h1>{"Interfaces that move with intent."}</h1>
                <p class="hero-lede">
                    {"I design and build web experiences where every transition explains something."}
                </p>
                <div class="hero-actions">
                    <RippleButton id="viewWorkBtn" class="btn-primary" label="View work" onclick={on_view_work} />
                    <RippleButton id="contactBtn" class="btn-ghost" label="Get in touch" onclick={on_contact} />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    reveal_key: AttrValue,
    eyebrow: AttrValue,
    title: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div
            class={classes!(RevealKind::SectionHeader.class_name(), REVEAL_CLASS)}
            data-reveal-key={props.reveal_key.clone()}
        >
            <p class="eyebrow">{props.eyebrow.clone()}</p>
            <h2>{props.title.clone()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MotionLoopProps {
    variant: LoopVariant,
    #[prop_or_default]
    style: Option<AttrValue>,
}

#[function_component(MotionLoop)]
fn motion_loop(props: &MotionLoopProps) -> Html {
    html! {
        <div
            class={classes!("motion-loop", props.variant.as_str())}
            data-loop-variant={props.variant.as_str()}
            style={props.style.clone()}
            aria-hidden="true"
        >
            <span class="loop-dot"></span>
            <span class="loop-dot"></span>
            <span class="loop-dot"></span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectRecord,
    on_open: Callback<(u32, Option<LoopVariant>)>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let card_ref = use_node_ref();
    let tilt = use_state(CardTilt::default);

    let track = {
        let card_ref = card_ref.clone();
        let tilt = tilt.clone();
        move |pointer: PointerSample| {
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let mut next = *tilt;
            next.track(&config, dom::element_rect(&card), pointer);
            tilt.set(next);
        }
    };

    let onpointermove = {
        let track = track.clone();
        Callback::from(move |event: PointerEvent| track(pointer_sample(&event)))
    };

    let ontouchmove = Callback::from(move |event: TouchEvent| {
        let first_touch = event
            .touches()
            .get(0)
            .map(|touch| (f64::from(touch.client_x()), f64::from(touch.client_y())));
        if let Some(pointer) = PointerSample::from_sources(None, first_touch) {
            track(pointer);
        }
    });

    let reset = {
        let tilt = tilt.clone();
        Callback::from(move |_: PointerEvent| {
            let mut next = *tilt;
            next.reset();
            tilt.set(next);
        })
    };

    let onclick = {
        let card_ref = card_ref.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let Some(id) = card
                .get_attribute("data-project-id")
                .as_deref()
                .and_then(parse_project_id)
            else {
                return;
            };
            on_open.emit((id, dom::card_snippet(id)));
        })
    };

    let project = &props.project;

    html! {
        <article
            ref={card_ref}
            class={classes!(RevealKind::ProjectCard.class_name(), REVEAL_CLASS)}
            data-project-id={project.id.to_string()}
            data-reveal-key={format!("project-{}", project.id)}
            style={tilt.card_style()}
            tabindex="0"
            onpointermove={onpointermove}
            onpointerleave={reset.clone()}
            onpointerup={reset}
            ontouchmove={ontouchmove}
            onclick={onclick}
        >
            <div class="project-preview" style={tilt.preview_style()}>
                <MotionLoop variant={project.loop_variant} />
            </div>
            <div class="project-copy">
                <h3>{project.title.clone()}</h3>
                <p class="muted">{project.subtitle.clone()}</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalViewProps {
    view: Option<ModalView>,
    on_close: Callback<()>,
}

#[function_component(ProjectModalView)]
fn project_modal_view(props: &ProjectModalViewProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let is_open = props.view.is_some();
    let (loop_style, loop_body) = match props.view.as_ref().map(|view| view.visual) {
        Some(ModalVisual::Snippet { variant, scale }) => (
            None,
            html! {
                <MotionLoop variant={variant} style={AttrValue::from(format!("transform: scale({scale});"))} />
            },
        ),
        Some(ModalVisual::Fallback { background }) => (
            Some(AttrValue::from(format!("background: {background};"))),
            html! {},
        ),
        None => (None, html! {}),
    };

    let (title, subtitle, details) = match props.view.as_ref() {
        Some(view) => (
            view.title.clone(),
            view.subtitle.clone(),
            view.details
                .iter()
                .enumerate()
                .map(|(index, detail)| html! {
                    <li key={format!("{}-{index}", view.project_id)}>{detail.clone()}</li>
                })
                .collect::<Html>(),
        ),
        None => (String::new(), String::new(), html! {}),
    };

    html! {
        <div
            id="projectModal"
            class={classes!("modal", is_open.then_some("is-open"))}
            aria-hidden={(!is_open).to_string()}
        >
            <div class="modal-backdrop" data-close-modal="" onclick={close.clone()}></div>
            <div class="modal-dialog" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
                <button
                    class="modal-close"
                    type="button"
                    data-close-modal=""
                    aria-label="Close project details"
                    onclick={close}
                >
                    {"×"}
                </button>
                <div id="modalLoop" class="modal-loop" style={loop_style}>{loop_body}</div>
                <h3 id="modalTitle">{title}</h3>
                <p id="modalSubtitle" class="muted">{subtitle}</p>
                <ul id="modalDetails">{details}</ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AboutProps {
    skills: Vec<SkillRecord>,
    animated: bool,
}

#[function_component(About)]
fn about(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="about">
            <SectionHeader reveal_key="about-header" eyebrow="About" title="Craft, timing, and restraint" />
            <div class="about-grid">
                <ol
                    class={classes!(RevealKind::AboutTimeline.class_name(), REVEAL_CLASS)}
                    data-reveal-key="about-timeline"
                >
                    { for TIMELINE.iter().map(|(year, text)| html! {
                        <li>
                            <span class="timeline-year">{*year}</span>
                            <p>{*text}</p>
                        </li>
                    })}
                </ol>
                <div
                    class={classes!(RevealKind::AboutSkills.class_name(), REVEAL_CLASS)}
                    data-reveal-key="about-skills"
                >
                    { for props.skills.iter().map(|skill| {
                        let level = fill_percent(skill.level);
                        html! {
                            <div class="skill">
                                <div class="skill-meta">
                                    <span>{skill.name.clone()}</span>
                                    <span class="muted">{format!("{level}%")}</span>
                                </div>
                                <div class="skill-track">
                                    <div
                                        class="skill-fill"
                                        data-skill-level={level.to_string()}
                                        style={bar_style(skill, props.animated)}
                                    ></div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let button = use_state(ContactButton::default);

    let onclick = {
        let button = button.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();

            let mut pending = (*button).clone();
            if !pending.submit() {
                return;
            }
            let mut restored = pending.clone();
            restored.restore();

            log_event(
                &config,
                LogLevel::Info,
                "contact_simulated",
                json!({ "label": restored.label() }),
            );
            button.set(pending);

            let button = button.clone();
            Timeout::new(config.contact_restore_ms, move || button.set(restored)).forget();
        })
    };

    let onsubmit = Callback::from(|event: SubmitEvent| event.prevent_default());

    html! {
        <section id="contact" class="contact">
            <SectionHeader reveal_key="contact-header" eyebrow="Contact" title="Start a conversation" />
            <div class="contact-grid">
                <form
                    class={classes!(RevealKind::ContactCard.class_name(), REVEAL_CLASS)}
                    data-reveal-key="contact-card"
                    onsubmit={onsubmit}
                >
                    <label>
                        <span>{"Name"}</span>
                        <input type="text" name="name" placeholder="Your name" />
                    </label>
                    <label>
                        <span>{"Email"}</span>
                        <input type="email" name="email" placeholder="you@example.com" />
                    </label>
                    <label>
                        <span>{"Project"}</span>
                        <textarea name="message" rows="4" placeholder="What are you building?" />
                    </label>
                    <RippleButton
                        id="fakeSubmit"
                        class="btn-primary"
                        kind="submit"
                        label={button.label().to_string()}
                        disabled={button.disabled()}
                        style={button.style()}
                        onclick={onclick}
                    />
                </form>
                <aside
                    class={classes!(RevealKind::ContactMeta.class_name(), REVEAL_CLASS)}
                    data-reveal-key="contact-meta"
                >
                    <p class="muted">{"Usually replies within two days."}</p>
                    <p>{"Open to freelance motion and front-end work."}</p>
                </aside>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = *use_memo((), |_| dom::read_config());
    let content = use_memo((), move |_| load_content(&config));
    let modal = use_reducer({
        let content = content.clone();
        move || ModalStore {
            config,
            content,
            modal: ProjectModal::new(),
        }
    });
    let header_hidden = use_state(|| false);
    let skills_animated = use_state(|| false);
    let skill_frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let header_hidden = header_hidden.clone();
        use_effect_with((), move |_| {
            let mut header = ScrollHeader::new(&config, window().scroll_y().unwrap_or(0.0));
            let listener = EventListener::new(&window(), "scroll", move |_| {
                let was_hidden = header.is_hidden();
                let hidden = header.on_scroll(window().scroll_y().unwrap_or(0.0));
                if hidden != was_hidden {
                    header_hidden.set(hidden);
                }
            });
            move || drop(listener)
        });
    }

    {
        let modal = modal.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&document(), "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    modal.dispatch(ModalAction::Key(event.key()));
                }
            });
            move || drop(listener)
        });
    }

    use_effect_with(modal.modal.body_overflow(), |overflow| {
        dom::set_body_overflow(overflow);
        || ()
    });

    {
        let skills_animated = skills_animated.clone();
        let skill_frame = skill_frame.clone();
        use_effect_with((), move |_| {
            let mut bars = SkillBars::default();
            let observer = dom::observe_reveals(&config, move |effect: RevealEffect| {
                log_event(
                    &config,
                    LogLevel::Debug,
                    "element_revealed",
                    json!({ "key": effect.key, "kind": effect.kind.class_name() }),
                );

                if effect.animate_skills && bars.trigger() {
                    log_event(&config, LogLevel::Debug, "skill_bars_animated", json!({}));
                    let skills_animated = skills_animated.clone();
                    *skill_frame.borrow_mut() =
                        Some(request_animation_frame(move |_| skills_animated.set(true)));
                }
            });
            move || drop(observer)
        });
    }

    let on_open = {
        let modal = modal.clone();
        Callback::from(move |(id, snippet): (u32, Option<LoopVariant>)| {
            modal.dispatch(ModalAction::Open { id, snippet });
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    html! {
        <ContextProvider<MotionConfig> context={config}>
            <SiteHeader hidden={*header_hidden} />
            <main id="content">
                <Hero />
                <section id="projects" class="projects">
                    <SectionHeader reveal_key="projects-header" eyebrow="Selected work" title="Projects in motion" />
                    <div class="project-grid">
                        { for content.projects.iter().map(|project| html! {
                            <ProjectCard
                                key={project.id.to_string()}
                                project={project.clone()}
                                on_open={on_open.clone()}
                            />
                        })}
                    </div>
                </section>
                <About skills={content.skills.clone()} animated={*skills_animated} />
                <Contact />
            </main>
            <ProjectModalView view={modal.modal.view().cloned()} on_close={on_close} />
        </ContextProvider<MotionConfig>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(root) = document().get_element_by_id("app") else {
        gloo::console::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
