//! The portfolio page: fixed markup tree plus every interactive behavior
//! wired over it. Each behavior is independent; they only meet through the
//! classes and inline styles they write.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{notify, Severity};
use crate::components::scroll_to_top::ScrollToTop;
use crate::effects;
use crate::utils::footer::rewrite_year;
use crate::utils::mailto::ContactMessage;
use crate::utils::scroll;

const TAGLINE: &str = "Explorer of the Computational Biology domain";
const COPYRIGHT: &str = "© 2025 Aditya Naman Soni. All rights reserved.";

const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("education", "Education"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("achievements", "Achievements"),
    ("publications", "Publications"),
    ("contact", "Contact"),
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let menu_open = use_state(|| false);
    let header_solid = use_state(|| false);
    let active_section = use_state(|| None::<String>);
    let tagline = use_state(|| TAGLINE.to_string());

    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);

    // Scroll listener: header presentation and active-link highlighting.
    // Recomputed from scratch on every scroll event, plus once eagerly so the
    // initial render matches the restored scroll position.
    {
        let header_solid = header_solid.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = move || {
                    if let Some(win) = web_sys::window() {
                        let y = win.scroll_y().unwrap_or(0.0);
                        header_solid.set(scroll::header_is_opaque(y));
                        if let Some(doc) = win.document() {
                            let spans = effects::scroll::section_spans(&doc);
                            active_section
                                .set(scroll::active_section(&spans, y).map(str::to_string));
                        }
                    }
                };
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(on_scroll.clone());
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    on_scroll();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Escape closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                            move |event: web_sys::KeyboardEvent| {
                                if event.key() == "Escape" {
                                    menu_open.set(false);
                                }
                            },
                        );
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                                let _ = doc.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || destructor()
            },
            (),
        );
    }

    // One-shot mount effects: intersection observers, image fades, typewriter.
    {
        let tagline = tagline.clone();
        use_effect_with_deps(
            move |_| {
                let mut observers = Vec::new();
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    observers.extend(effects::observer::observe_fade_ins(&document));
                    observers.extend(effects::observer::observe_sections(&document));
                    effects::images::fade_in_images(&document);
                }
                effects::typewriter::run(tagline, TAGLINE.to_string());
                move || {
                    for observer in observers {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |section_id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            effects::scroll::scroll_to_section(section_id);
        })
    };

    let on_view_work = {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            effects::scroll::scroll_to_section("projects");
        })
    };
    let on_request_cv = {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            effects::scroll::scroll_to_section("contact");
            notify(
                "Please contact me via the form below to request my CV.",
                Severity::Info,
            );
        })
    };

    // Decorative hover pairs: symmetric enter/leave inline-style writes.
    let tag_enter = Callback::from(|e: MouseEvent| {
        let tag: HtmlElement = e.target_unchecked_into();
        let _ = tag.style().set_property("transform", "translateY(-2px)");
    });
    let tag_leave = Callback::from(|e: MouseEvent| {
        let tag: HtmlElement = e.target_unchecked_into();
        let _ = tag.style().set_property("transform", "translateY(0)");
    });
    let card_enter = Callback::from(|e: MouseEvent| {
        let card: HtmlElement = e.target_unchecked_into();
        let _ = card
            .style()
            .set_property("border-color", "var(--color-primary)");
    });
    let card_leave = Callback::from(|e: MouseEvent| {
        let card: HtmlElement = e.target_unchecked_into();
        let _ = card
            .style()
            .set_property("border-color", "var(--color-card-border)");
    });

    // Required-field hinting on blur, cleared again on focus.
    let input_blur = Callback::from(|e: FocusEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let color = if input.value().trim().is_empty() {
            "var(--color-error)"
        } else {
            "var(--color-border)"
        };
        let _ = input.style().set_property("border-color", color);
    });
    let textarea_blur = Callback::from(|e: FocusEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        let color = if area.value().trim().is_empty() {
            "var(--color-error)"
        } else {
            "var(--color-border)"
        };
        let _ = area.style().set_property("border-color", color);
    });
    let field_focus = Callback::from(|e: FocusEvent| {
        let field: HtmlElement = e.target_unchecked_into();
        let _ = field
            .style()
            .set_property("border-color", "var(--color-primary)");
    });

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let contact = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            if !contact.is_complete() {
                notify("Please fill in all required fields.", Severity::Error);
                return;
            }
            if let Some(window) = web_sys::window() {
                if window
                    .open_with_url_and_target(&contact.mailto_uri(), "_blank")
                    .is_err()
                {
                    log::warn!("failed to open mail client");
                }
            }
            notify(
                "Thank you for your message! Your email client should open now.",
                Severity::Success,
            );
            name.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    let nav_links = NAV_ITEMS
        .iter()
        .map(|&(id, label)| {
            let is_active = active_section.as_deref() == Some(id);
            html! {
                <li class="nav__item" key={id}>
                    <a
                        href={format!("#{id}")}
                        class={classes!("nav__link", is_active.then_some("active"))}
                        onclick={nav_link(id)}
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <>
        <header id="header" class="header" style={scroll::header_style(*header_solid)}>
            <nav id="nav-menu" class="nav">
                <a href="#home" class="nav__logo" onclick={nav_link("home")}>{"ANS"}</a>
                <ul class={classes!("nav__list", (*menu_open).then_some("show"))}>
                    { nav_links }
                </ul>
                <button
                    id="nav-toggle"
                    class={classes!("nav__toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={on_toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
            </nav>
        </header>

        <main>
            <section id="home" class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">{"Aditya Naman Soni"}</h1>
                    <p class="hero__tagline">{ (*tagline).clone() }</p>
                    <div class="hero__buttons">
                        <button class="btn btn--primary" onclick={on_view_work}>
                            {"View My Work"}
                        </button>
                        <button class="btn btn--outline" onclick={on_request_cv}>
                            {"Download CV"}
                        </button>
                    </div>
                </div>
                <img class="hero__photo" src="assets/profile.jpg" alt="Portrait" />
            </section>

            <section id="about" class="about">
                <h2 class="section__title">{"About Me"}</h2>
                <p>
                    {"Bioinformatics researcher working at the intersection of \
                      genomics, machine learning, and systems biology."}
                </p>
            </section>

            <section id="education" class="education">
                <h2 class="section__title">{"Education"}</h2>
                <div class="education__item">
                    <h3>{"M.Sc. Bioinformatics"}</h3>
                    <p>{"Specialized in sequence analysis and structural modelling."}</p>
                </div>
                <div class="education__item">
                    <h3>{"B.Sc. Biotechnology"}</h3>
                    <p>{"Graduated with distinction."}</p>
                </div>
            </section>

            <section id="experience" class="experience">
                <h2 class="section__title">{"Experience"}</h2>
                <div class="experience__item">
                    <h3>{"Research Assistant — Computational Genomics Lab"}</h3>
                    <p>{"Built variant-calling pipelines and analysis tooling."}</p>
                </div>
            </section>

            <section id="projects" class="projects">
                <h2 class="section__title">{"Projects"}</h2>
                <div class="projects__grid">
                    <div
                        class="project__card"
                        onmouseenter={card_enter.clone()}
                        onmouseleave={card_leave.clone()}
                    >
                        <h3>{"Protein Structure Explorer"}</h3>
                        <p>{"Interactive viewer for predicted protein structures."}</p>
                    </div>
                    <div
                        class="project__card"
                        onmouseenter={card_enter.clone()}
                        onmouseleave={card_leave.clone()}
                    >
                        <h3>{"scRNA-seq Atlas"}</h3>
                        <p>{"Clustering and annotation of single-cell datasets."}</p>
                    </div>
                </div>
            </section>

            <section id="skills" class="skills">
                <h2 class="section__title">{"Skills"}</h2>
                <div class="skill__category">
                    <h3>{"Programming"}</h3>
                    { for ["Rust", "Python", "R", "SQL"].iter().map(|skill| html! {
                        <span
                            class="skill-tag"
                            onmouseenter={tag_enter.clone()}
                            onmouseleave={tag_leave.clone()}
                        >
                            {*skill}
                        </span>
                    }) }
                </div>
                <div class="skill__category">
                    <h3>{"Bioinformatics"}</h3>
                    { for ["NGS analysis", "Phylogenetics", "Molecular docking"].iter().map(|skill| html! {
                        <span
                            class="skill-tag"
                            onmouseenter={tag_enter.clone()}
                            onmouseleave={tag_leave.clone()}
                        >
                            {*skill}
                        </span>
                    }) }
                </div>
            </section>

            <section id="achievements" class="achievements">
                <h2 class="section__title">{"Achievements"}</h2>
                <div
                    class="achievement__item"
                    onmouseenter={card_enter.clone()}
                    onmouseleave={card_leave.clone()}
                >
                    <p>{"Best poster award, national bioinformatics symposium."}</p>
                </div>
            </section>

            <section id="publications" class="publications">
                <h2 class="section__title">{"Publications"}</h2>
                <div class="publication__item">
                    <p>{"Comparative analysis of variant-calling pipelines (preprint)."}</p>
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section__title">{"Get In Touch"}</h2>
                <form id="contact-form" class="contact__form" {onsubmit}>
                    <input
                        class="form-control"
                        type="text"
                        name="name"
                        placeholder="Your name"
                        required={true}
                        value={(*name).clone()}
                        oninput={let name = name.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                        onblur={input_blur.clone()}
                        onfocus={field_focus.clone()}
                    />
                    <input
                        class="form-control"
                        type="email"
                        name="email"
                        placeholder="Your email"
                        required={true}
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                        onblur={input_blur.clone()}
                        onfocus={field_focus.clone()}
                    />
                    <input
                        class="form-control"
                        type="text"
                        name="subject"
                        placeholder="Subject"
                        required={true}
                        value={(*subject).clone()}
                        oninput={let subject = subject.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            subject.set(input.value());
                        }}
                        onblur={input_blur}
                        onfocus={field_focus.clone()}
                    />
                    <textarea
                        class="form-control"
                        name="message"
                        placeholder="Your message"
                        required={true}
                        value={(*message).clone()}
                        oninput={let message = message.clone(); move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(area.value());
                        }}
                        onblur={textarea_blur}
                        onfocus={field_focus}
                    />
                    <button class="btn btn--primary" type="submit">{"Send Message"}</button>
                </form>
            </section>
        </main>

        <footer class="footer">
            <div class="footer__content">
                <p>{ rewrite_year(COPYRIGHT, year) }</p>
            </div>
        </footer>

        <ScrollToTop />
        </>
    }
}
