use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::before_after::BeforeAfterReveal;
use crate::components::brick_wall::BrickWall;
use crate::components::contact_form::ContactForm;
use crate::components::motion_box::{MotionBox, Trigger};
use crate::components::nav::Nav;
use crate::config::{
    CARD_DURATION_SECS, CARD_STAGGER_SECS, HEADER_DURATION_SECS, HERO_OPACITY_DOMAIN, HERO_OPACITY_RANGE, HERO_SCALE_DOMAIN,
    HERO_SCALE_RANGE, ROW_STAGGER_SECS, SECTION_MARGIN_PX, BRICK_MARGIN_PX,
};
use crate::content::SiteContent;
use crate::hooks::region::use_region_progress;
use crate::hooks::scroll::use_scroll_state;
use crate::motion::entry::ViewportMargin;
use crate::motion::region::{interpolate, ScrollOffset};
use crate::motion::sequencer::{Stagger, Transition};
use crate::motion::variants::VariantKind;
use crate::Route;

fn header_transition() -> Transition {
    Transition::new(HEADER_DURATION_SECS)
}

/// Sections share the page's content handle; comparing it is a pointer check, so scroll
/// re-renders of `Home` don't reach them.
#[derive(Properties, PartialEq)]
struct SectionProps {
    content: Rc<SiteContent>,
}

#[function_component(HeroSection)]
fn hero_section(props: &SectionProps) -> Html {
    let hero = &props.content.hero;
    let node = use_node_ref();
    let progress = use_region_progress(node.clone(), ScrollOffset::START_START, ScrollOffset::END_START);
    let scale = interpolate(progress, HERO_SCALE_DOMAIN, HERO_SCALE_RANGE);
    let opacity = interpolate(progress, HERO_OPACITY_DOMAIN, HERO_OPACITY_RANGE);

    let intro = |delay: f64| header_transition().with_delay(delay);

    html! {
        <section class="hero" ref={node}>
            <div class="hero-image" style={format!("transform: scale({});", scale)}>
                <img src={hero.image.clone()} alt={hero.image_alt.clone()} />
            </div>
            <div class="hero-overlay" />

            <div class="hero-content" style={format!("opacity: {};", opacity)}>
                <MotionBox variant={VariantKind::FadeUp} transition={intro(0.3)} trigger={Trigger::Mount} class={classes!("hero-badge")}>
                    {hero.badge.clone()}
                </MotionBox>
                <MotionBox variant={VariantKind::FadeUp} transition={intro(0.5)} trigger={Trigger::Mount}>
                    <h1>
                        { for hero.headline.iter().enumerate().map(|(i, line)| html! {
                            <>
                                { if i > 0 { html! { <br /> } } else { html! {} } }
                                {line.clone()}
                            </>
                        }) }
                    </h1>
                </MotionBox>
                <MotionBox variant={VariantKind::FadeUp} transition={intro(0.7)} trigger={Trigger::Mount}>
                    <p>{hero.lead.clone()}</p>
                </MotionBox>
            </div>

            <MotionBox
                variant={VariantKind::FadeIn}
                transition={Transition::new(1.0).with_delay(1.2)}
                trigger={Trigger::Mount}
                class={classes!("scroll-indicator")}
            >
                <span>{"Scroll"}</span>
                <div class="scroll-line" />
            </MotionBox>
        </section>
    }
}

#[function_component(LegacySection)]
fn legacy_section(props: &SectionProps) -> Html {
    let legacy = &props.content.legacy;
    html! {
        <section class="legacy" id="legacy">
            <div class="legacy-bg" />
            <div class="legacy-container">
                <MotionBox
                    variant={VariantKind::FadeUp}
                    transition={header_transition()}
                    trigger={Trigger::InView(ViewportMargin(SECTION_MARGIN_PX))}
                    class={classes!("legacy-header")}
                >
                    <h2>{legacy.heading.clone()}</h2>
                    <p>{legacy.body.clone()}</p>
                </MotionBox>
                <BrickWall rows={legacy.rows.clone()} />
            </div>
        </section>
    }
}

#[function_component(TransformationSection)]
fn transformation_section(props: &SectionProps) -> Html {
    let t = &props.content.transformation;
    html! {
        <section class="transformation" id="transformation">
            <MotionBox variant={VariantKind::FadeUp} transition={header_transition()} class={classes!("transformation-header")}>
                <h2>{t.heading.clone()}</h2>
                <p>{t.subheading.clone()}</p>
            </MotionBox>

            <div class="before-after-container">
                <MotionBox
                    variant={VariantKind::ScaleIn}
                    transition={header_transition()}
                    trigger={Trigger::InView(ViewportMargin(SECTION_MARGIN_PX))}
                >
                    <BeforeAfterReveal before_src={t.before.clone()} after_src={t.after.clone()} />
                    <p class="ba-hint">{t.hint.clone()}</p>
                </MotionBox>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section(props: &SectionProps) -> Html {
    let services = &props.content.services;
    let count = services.items.len();
    html! {
        <section class="services" id="services">
            <MotionBox variant={VariantKind::FadeUp} transition={header_transition()} class={classes!("services-header")}>
                <h2>{services.heading.clone()}</h2>
            </MotionBox>

            <div class="services-grid">
                { for services.items.iter().enumerate().map(|(index, service)| html! {
                    <MotionBox
                        key={index}
                        variant={VariantKind::for_column(index, count)}
                        transition={Transition::new(CARD_DURATION_SECS).with_delay(Stagger::at(0, index).delay_with(ROW_STAGGER_SECS, CARD_STAGGER_SECS))}
                        trigger={Trigger::InView(ViewportMargin(BRICK_MARGIN_PX))}
                        class={classes!("service-card")}
                    >
                        <div class="service-image">
                            <img src={service.image.clone()} alt={service.title.clone()} loading="lazy" />
                        </div>
                        <div class="service-content">
                            <h3>{service.title.clone()}</h3>
                            <p>{service.description.clone()}</p>
                        </div>
                    </MotionBox>
                }) }
            </div>
        </section>
    }
}

#[function_component(GallerySection)]
fn gallery_section(props: &SectionProps) -> Html {
    let gallery = &props.content.gallery;
    html! {
        <section class="gallery" id="gallery">
            <MotionBox variant={VariantKind::FadeUp} transition={header_transition()} class={classes!("gallery-header")}>
                <h2>{gallery.heading.clone()}</h2>
            </MotionBox>

            <div class="gallery-track">
                <div class="gallery-carousel">
                    { for gallery.looped().enumerate().map(|(slot, (index, src))| html! {
                        <div key={slot} class="gallery-item">
                            <img src={src.clone()} alt={format!("Project {}", index + 1)} loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section(props: &SectionProps) -> Html {
    let contact = &props.content.contact;
    html! {
        <section class="contact" id="contact">
            <div class="contact-container">
                <MotionBox variant={VariantKind::FromLeft} transition={header_transition()} class={classes!("contact-info")}>
                    <h2>
                        { for contact.heading.iter().enumerate().map(|(i, line)| html! {
                            <>
                                { if i > 0 { html! { <br /> } } else { html! {} } }
                                {line.clone()}
                            </>
                        }) }
                    </h2>
                    <p>{contact.body.clone()}</p>

                    <div class="contact-details">
                        <div class="contact-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24">
                                    <path d="M6.62 10.79c1.44 2.83 3.76 5.14 6.59 6.59l2.2-2.2c.27-.27.67-.36 1.02-.24 1.12.37 2.33.57 3.57.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1-9.39 0-17-7.61-17-17 0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.45.57 3.57.11.35.03.74-.25 1.02l-2.2 2.2z"/>
                                </svg>
                            </div>
                            <div class="contact-item-text">
                                <span>{"Phone"}</span>
                                <a href={contact.phone_href.clone()}>{contact.phone_display.clone()}</a>
                            </div>
                        </div>

                        <div class="contact-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24">
                                    <path d="M12.04 2c-5.46 0-9.91 4.45-9.91 9.91 0 1.75.46 3.45 1.32 4.95L2.05 22l5.25-1.38c1.45.79 3.08 1.21 4.74 1.21 5.46 0 9.91-4.45 9.91-9.91 0-2.65-1.03-5.14-2.9-7.01A9.816 9.816 0 0012.04 2zm.01 1.67c2.2 0 4.26.86 5.82 2.42a8.225 8.225 0 012.41 5.83c0 4.54-3.7 8.23-8.24 8.23-1.48 0-2.93-.39-4.19-1.15l-.3-.17-3.12.82.83-3.04-.2-.32a8.188 8.188 0 01-1.26-4.38c.01-4.54 3.7-8.24 8.25-8.24zM8.53 7.33c-.16 0-.43.06-.66.31-.22.25-.87.86-.87 2.07 0 1.22.89 2.39 1 2.56.14.17 1.76 2.67 4.25 3.73.59.27 1.05.42 1.41.53.59.19 1.13.16 1.56.1.48-.07 1.46-.6 1.67-1.18.21-.58.21-1.07.15-1.18-.07-.1-.23-.16-.48-.27-.25-.14-1.47-.74-1.69-.82-.23-.08-.37-.12-.56.12-.16.25-.64.81-.78.97-.15.17-.29.19-.53.07-.26-.13-1.06-.39-2-1.23-.74-.66-1.23-1.47-1.38-1.72-.12-.24-.01-.39.11-.5.11-.11.27-.29.37-.44.13-.14.17-.25.25-.41.08-.17.04-.31-.02-.43-.06-.11-.56-1.35-.77-1.84-.2-.48-.4-.42-.56-.43-.14 0-.3-.01-.47-.01z"/>
                                </svg>
                            </div>
                            <div class="contact-item-text">
                                <span>{"WhatsApp"}</span>
                                <a href={contact.whatsapp_href.clone()} target="_blank" rel="noopener noreferrer">
                                    {contact.whatsapp_display.clone()}
                                </a>
                            </div>
                        </div>

                        <div class="contact-item">
                            <div class="contact-icon">
                                <svg viewBox="0 0 24 24">
                                    <path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z"/>
                                </svg>
                            </div>
                            <div class="contact-item-text">
                                <span>{"Location"}</span>
                                <p>{contact.address.clone()}</p>
                            </div>
                        </div>
                    </div>
                </MotionBox>

                <MotionBox variant={VariantKind::FromRight} transition={header_transition().with_delay(0.2)}>
                    <ContactForm acknowledgment={contact.acknowledgment.clone()} />
                </MotionBox>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &SectionProps) -> Html {
    let year = chrono::Utc::now().year();
    html! {
        <footer>
            <p>
                {format!("© {} {}. All rights reserved. | ", year, props.content.company)}
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </p>
        </footer>
    }
}

/// The whole single-page site. Owns the page scroll state.
#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let scroll = use_scroll_state();

    let Some(content) = content else {
        return html! {};
    };

    html! {
        <div class="heritage">
            <style>{HOME_STYLES}</style>
            <div class="progress-bar" style={format!("height: {}%;", scroll.progress_percent)} />

            <Nav content={content.clone()} scrolled={scroll.scrolled_past_threshold} />

            <HeroSection content={content.clone()} />
            <LegacySection content={content.clone()} />
            <TransformationSection content={content.clone()} />
            <ServicesSection content={content.clone()} />
            <GallerySection content={content.clone()} />
            <ContactSection content={content.clone()} />
            <Footer {content} />
        </div>
    }
}

const HOME_STYLES: &str = r#"
    .heritage {
        --sand: #b08d57;
        --sand-light: #d9c3a0;
        --ink: #1c1a17;
        --cream: #f5efe6;
        background: var(--cream);
        color: var(--ink);
        font-family: "Georgia", "Times New Roman", serif;
        overflow-x: hidden;
    }
    .heritage section {
        position: relative;
        padding: 7rem 2rem;
    }
    .heritage h2 {
        font-size: clamp(2rem, 4vw, 3rem);
        font-weight: 400;
        margin: 0 0 1.5rem;
    }

    .progress-bar {
        position: fixed;
        top: 0;
        right: 0;
        width: 3px;
        background: var(--sand);
        z-index: 200;
        transition: height 0.1s linear;
    }

    .site-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1.75rem 3rem;
        color: #fff;
        transition: background 0.4s ease, padding 0.4s ease, box-shadow 0.4s ease;
    }
    .site-nav.scrolled {
        background: rgba(28, 26, 23, 0.95);
        padding: 1rem 3rem;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
    }
    .site-nav .logo {
        color: #fff;
        text-decoration: none;
        font-size: 1.4rem;
        letter-spacing: 0.05em;
    }
    .nav-links {
        display: flex;
        gap: 2.5rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-links a {
        color: rgba(255, 255, 255, 0.85);
        text-decoration: none;
        font-size: 0.85rem;
        letter-spacing: 0.12em;
        text-transform: uppercase;
        transition: color 0.3s ease;
    }
    .nav-links a:hover {
        color: var(--sand-light);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        margin: 5px 0;
        background: #fff;
    }

    .hero {
        height: 100vh;
        min-height: 600px;
        padding: 0 !important;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
    }
    .hero-image {
        position: absolute;
        inset: 0;
        will-change: transform;
    }
    .hero-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: center 30%;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, rgba(0, 0, 0, 0.2) 0%, rgba(0, 0, 0, 0.65) 100%);
    }
    .hero-content {
        position: relative;
        text-align: center;
        max-width: 900px;
        padding: 0 2rem;
    }
    .hero-badge {
        display: inline-block;
        padding: 0.5rem 1.25rem;
        border: 1px solid var(--sand-light);
        font-size: 0.8rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin-bottom: 2rem;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 6vw, 5rem);
        font-weight: 400;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .hero p {
        font-size: 1.2rem;
        line-height: 1.7;
        opacity: 0.9;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2.5rem;
        left: 50%;
        margin-left: -2rem;
        width: 4rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
        font-size: 0.7rem;
        letter-spacing: 0.3em;
        text-transform: uppercase;
    }
    .scroll-line {
        width: 1px;
        height: 50px;
        background: linear-gradient(180deg, #fff, transparent);
        animation: scrollPulse 2s ease-in-out infinite;
    }
    @keyframes scrollPulse {
        0%, 100% { opacity: 0.3; }
        50% { opacity: 1; }
    }

    .legacy {
        background: var(--ink);
        color: var(--cream);
        overflow: hidden;
    }
    .legacy-bg {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at 20% 20%, rgba(176, 141, 87, 0.15), transparent 60%);
    }
    .legacy-container {
        position: relative;
        max-width: 1100px;
        margin: 0 auto;
    }
    .legacy-header {
        text-align: center;
        max-width: 700px;
        margin: 0 auto 4rem;
    }
    .legacy-header p {
        line-height: 1.8;
        opacity: 0.8;
    }
    .brick-wall {
        display: flex;
        flex-direction: column;
        gap: 12px;
    }
    .brick-row {
        display: flex;
        gap: 12px;
    }
    .brick-row.offset {
        padding-left: 8%;
        padding-right: 8%;
    }
    .brick {
        flex: 1;
        min-height: 120px;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        border-radius: 4px;
        text-align: center;
    }
    .brick.empty {
        background: rgba(176, 141, 87, 0.12);
        border: 1px solid rgba(176, 141, 87, 0.2);
    }
    .brick.content {
        background: var(--sand);
        color: #fff;
        padding: 1.5rem;
    }
    .brick.word {
        font-size: 1.3rem;
        letter-spacing: 0.05em;
    }
    .brick-number {
        font-size: 2.75rem;
        line-height: 1;
    }
    .brick-label {
        margin-top: 0.5rem;
        font-size: 0.8rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }

    .transformation-header,
    .services-header,
    .gallery-header {
        text-align: center;
        margin-bottom: 3.5rem;
    }
    .before-after-container {
        max-width: 1000px;
        margin: 0 auto;
    }
    .ba-hint {
        text-align: center;
        margin-top: 1.25rem;
        font-size: 0.85rem;
        letter-spacing: 0.1em;
        opacity: 0.6;
    }

    .services {
        background: #fff;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .service-card {
        background: var(--cream);
        border-radius: 6px;
        overflow: hidden;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
    }
    .service-image {
        height: 240px;
        overflow: hidden;
    }
    .service-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: center top;
        transition: transform 0.6s ease;
    }
    .service-card:hover .service-image img {
        transform: scale(1.05);
    }
    .service-content {
        padding: 2rem;
    }
    .service-content h3 {
        font-weight: 400;
        font-size: 1.4rem;
        margin: 0 0 1rem;
    }
    .service-content p {
        line-height: 1.7;
        opacity: 0.75;
    }

    .gallery {
        background: var(--ink);
        color: var(--cream);
        padding-left: 0 !important;
        padding-right: 0 !important;
    }
    .gallery-track {
        overflow: hidden;
    }
    .gallery-carousel {
        display: flex;
        gap: 1.5rem;
        width: max-content;
        animation: galleryScroll 40s linear infinite;
    }
    .gallery-carousel:hover {
        animation-play-state: paused;
    }
    .gallery-item {
        position: relative;
        width: 420px;
        height: 300px;
        flex-shrink: 0;
        border-radius: 4px;
        overflow: hidden;
    }
    .gallery-item img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    @keyframes galleryScroll {
        from { transform: translateX(0); }
        to { transform: translateX(calc(-50% - 0.75rem)); }
    }

    .contact-container {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .contact-info p {
        line-height: 1.8;
        opacity: 0.8;
    }
    .contact-details {
        margin-top: 2.5rem;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-item {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .contact-icon {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        background: var(--sand);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .contact-icon svg {
        width: 22px;
        height: 22px;
        fill: #fff;
    }
    .contact-item-text span {
        display: block;
        font-size: 0.75rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        opacity: 0.6;
    }
    .contact-item-text a,
    .contact-item-text p {
        color: var(--ink);
        text-decoration: none;
        margin: 0.2rem 0 0;
        font-size: 1.05rem;
    }
    .contact-form {
        background: #fff;
        padding: 2.5rem;
        border-radius: 6px;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08);
    }
    .form-group {
        margin-bottom: 1.5rem;
    }
    .form-group label {
        display: block;
        font-size: 0.8rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        margin-bottom: 0.5rem;
        opacity: 0.7;
    }
    .form-group input,
    .form-group textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.9rem 1rem;
        border: 1px solid #e0d6c6;
        background: var(--cream);
        font: inherit;
        transition: border-color 0.3s ease;
    }
    .form-group textarea {
        min-height: 120px;
        resize: vertical;
    }
    .form-group input:focus,
    .form-group textarea:focus {
        outline: none;
        border-color: var(--sand);
    }
    .submit-btn {
        width: 100%;
        padding: 1.1rem;
        background: var(--sand);
        color: #fff;
        border: none;
        font: inherit;
        letter-spacing: 0.12em;
        text-transform: uppercase;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .submit-btn:hover {
        background: #97763f;
    }
    .form-acknowledgment {
        margin-top: 1rem;
        text-align: center;
        color: var(--sand);
    }

    .heritage footer {
        background: var(--ink);
        color: rgba(245, 239, 230, 0.6);
        text-align: center;
        padding: 2rem;
        font-size: 0.85rem;
    }
    .heritage footer a {
        color: var(--sand-light);
    }

    @media (max-width: 900px) {
        .site-nav {
            padding: 1.25rem 1.5rem;
        }
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 1.25rem;
            padding: 1.5rem;
            background: rgba(28, 26, 23, 0.97);
        }
        .nav-links.open {
            display: flex;
        }
        .brick-row,
        .brick-row.offset {
            flex-wrap: wrap;
            padding: 0;
        }
        .brick {
            flex: 1 1 40%;
        }
        .contact-container {
            grid-template-columns: 1fr;
        }
        .gallery-item {
            width: 300px;
            height: 220px;
        }
    }
"#;
