use yew::prelude::*;

use crate::components::cycling_text::CyclingText;
use crate::components::modal::{Modal, ModalSize};
use crate::waitlist::form::WaitlistForm;
use crate::waitlist::session::{ModalController, ModalKind, UserType, WaitlistSession};

#[derive(Properties, PartialEq)]
pub struct VideoContentSectionProps {
    pub title: String,
    pub subtitle: String,
    pub video: String,
    #[prop_or_default]
    pub second_title: String,
    #[prop_or_default]
    pub second_subtitle: String,
    #[prop_or_default]
    pub second_video: String,
    pub list_items: Vec<String>,
    pub section_id: String,
    #[prop_or(true)]
    pub looped: bool,
}

#[function_component(VideoContentSection)]
fn video_content_section(props: &VideoContentSectionProps) -> Html {
    let has_second = !props.second_title.is_empty();

    html! {
        <section class="video-content-section" id={props.section_id.clone()}>
            <div class="video-content-row">
                <div class="video-content-text">
                    <h2>{&props.title}</h2>
                    <p>{&props.subtitle}</p>
                    <ul>
                        { for props.list_items.iter().map(|item| html! { <li>{item}</li> }) }
                    </ul>
                </div>
                <div class="video-content-media">
                    <video
                        src={props.video.clone()}
                        autoplay=true
                        muted=true
                        loop={props.looped}
                        playsinline=true
                        preload="auto"
                    />
                </div>
            </div>
            {
                if has_second {
                    html! {
                        <div class="video-content-row reversed">
                            <div class="video-content-text">
                                <h2>{&props.second_title}</h2>
                                <p>{&props.second_subtitle}</p>
                            </div>
                            <div class="video-content-media">
                                <video
                                    src={props.second_video.clone()}
                                    autoplay=true
                                    muted=true
                                    loop={props.looped}
                                    playsinline=true
                                    preload="auto"
                                />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct JoinCardProps {
    user_type: UserType,
    title: String,
    tagline: String,
    body: String,
    cta: String,
    on_select: Callback<UserType>,
}

#[function_component(JoinCard)]
fn join_card(props: &JoinCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let user_type = props.user_type;
        Callback::from(move |_: MouseEvent| on_select.emit(user_type))
    };

    html! {
        <div class="join-card">
            <div class="join-card-copy">
                <h3>{&props.title}</h3>
                <p class="join-tagline">{&props.tagline}</p>
                <p class="join-body">{&props.body}</p>
            </div>
            <button class="join-cta" onclick={onclick}>{&props.cta}</button>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let session = use_reducer(WaitlistSession::default);
    let modals = use_state(ModalController::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_modal = |kind: ModalKind| {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *modals;
            next.open(kind);
            modals.set(next);
        })
    };
    let close_modal = |kind: ModalKind| {
        let modals = modals.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *modals;
            next.close(kind);
            modals.set(next);
        })
    };

    let open_form_modal = open_modal(ModalKind::WaitlistForm);
    let open_video_modal = open_modal(ModalKind::VideoShowcase);
    let close_form_modal = close_modal(ModalKind::WaitlistForm);
    let close_video_modal = close_modal(ModalKind::VideoShowcase);
    let close_join_modal = close_modal(ModalKind::JoinSelector);

    let on_user_type_selected = {
        let modals = modals.clone();
        Callback::from(move |user_type: UserType| {
            let mut next = *modals;
            next.select_user_type(user_type);
            modals.set(next);
        })
    };

    let scroll_to_section = |id: &'static str| {
        Callback::from(move |_: MouseEvent| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(section) = document.get_element_by_id(id) {
                    section.scroll_into_view_with_bool(true);
                }
            }
        })
    };

    let scroll_to_content = scroll_to_section("handsfree-section");
    let scroll_to_join = scroll_to_section("how-to-join-section");

    let suffixes = vec![
        "Africa".to_string(),
        "Lagos".to_string(),
        "Durban".to_string(),
        "Accra".to_string(),
        "Nairobi".to_string(),
        "Kigali".to_string(),
    ];

    html! {
        <div class="landing-page">
            <nav class="top-nav">
                <span class="nav-brand">{"Karibu"}</span>
                <button class="nav-join" onclick={scroll_to_join}>{"How to join"}</button>
            </nav>

            <header class="hero">
                <video
                    class="hero-video"
                    src="/videos/hero.mp4"
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    preload="auto"
                />
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <CyclingText
                        text="Don’t just visit"
                        suffixes={suffixes}
                        bottom_text="Connect with it."
                        class={classes!("hero-headline")}
                    />
                    <p class="hero-description">
                        {"Stays, city companions and borderless payments across the \
                          continent. Hosting handled end to end, journeys that feel \
                          like coming home."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta primary" onclick={open_form_modal.clone()}>
                            {"Join the Movement"}
                        </button>
                        <button class="hero-cta secondary" onclick={open_video_modal}>
                            {"Watch Video"}
                        </button>
                    </div>
                    <button
                        class="hero-arrow"
                        onclick={scroll_to_content}
                        aria-label="Scroll to first section"
                    >
                        {"↓"}
                    </button>
                </div>
            </header>

            <VideoContentSection
                title="Hands-Free Management"
                subtitle="From bookings to check-outs, Karibu handles every detail. You earn effortlessly while your guests enjoy a flawless stay."
                video="/videos/hands-free-1.webm"
                second_title="Focus on what matters most"
                second_subtitle="With Karibu associates handling the chats, check-ins and care, hosting feels easy — and guests feel at home."
                second_video="/videos/hands-free-2.webm"
                list_items={vec![
                    "Automated booking management".to_string(),
                    "24/7 guest communication & support".to_string(),
                    "Seamless check-in, check-out & cleaning".to_string(),
                ]}
                section_id="handsfree-section"
            />

            <VideoContentSection
                title="Xperience Gallery"
                subtitle="From vibrant cities to local secrets, Karibu uncovers it all, helping you explore, connect and make travel unforgettable."
                video="/videos/xperience-1.mp4"
                second_title="See the soul of every stay"
                second_subtitle="The Xperience Gallery reveals the character of every home and journey, building the trust that inspires your next adventure."
                second_video="/videos/xperience-2.mp4"
                list_items={vec![
                    "Explore authentic reels of vibrant cities and local secrets.".to_string(),
                    "Create & share your unique city story with friends and family.".to_string(),
                    "Feel the home’s aura through video reels before you book.".to_string(),
                ]}
                section_id="xperience-section"
            />

            <VideoContentSection
                title="Borderless Payment"
                subtitle="Pay with confidence. Karibu Cowries makes every transaction, from booking to last-minute extras, simple and secure."
                video="/videos/borderless-1.mp4"
                second_title="Seamless journeys, simple payments"
                second_subtitle="Pay your way, so your focus stays on the adventure, not the transaction."
                second_video="/videos/borderless-2.mp4"
                list_items={vec![
                    "Convert with USD valuation — 1 ACW = 1 USD".to_string(),
                    "Share Cowries easily with family & friends".to_string(),
                    "Withdraw in any African currency with ease".to_string(),
                ]}
                section_id="borderless-section"
            />

            <VideoContentSection
                title="Karibu Associates"
                subtitle="Your personal city companion. Managing your stay, guiding your steps, and making every moment smoother."
                video="/videos/associate-1.mp4"
                second_title="Feel the city, not the stress"
                second_subtitle="Guests are welcomed like family, guided through culture and hidden gems, and supported every step of the way."
                second_video="/videos/associate-2.mp4"
                list_items={vec![
                    "Welcome you at check-in and ensure comfort".to_string(),
                    "Connect you with culture, tours and insider experiences".to_string(),
                    "Handle safety, logistics and local support".to_string(),
                ]}
                section_id="associates-section"
            />

            <section class="features-section">
                <div class="feature-list">
                    <h2>{"What you get"}</h2>
                    <ul>
                        <li>
                            <details>
                                <summary>{"Verified homes across the continent"}</summary>
                                <div class="feature-desc">
                                    <p>{"Every listing is visited and verified before it goes live, so what you see in the gallery is what opens the door."}</p>
                                </div>
                            </details>
                        </li>
                        <li>
                            <details>
                                <summary>{"A companion in every city"}</summary>
                                <div class="feature-desc">
                                    <p>{"Certified associates welcome you at check-in, connect you with culture and handle logistics for the whole stay."}</p>
                                </div>
                            </details>
                        </li>
                        <li>
                            <details>
                                <summary>{"One wallet, every border"}</summary>
                                <div class="feature-desc">
                                    <p>{"Cowries hold their value against the dollar and move with you — book, tip and withdraw in any African currency."}</p>
                                </div>
                            </details>
                        </li>
                        <li>
                            <details>
                                <summary>{"A handbook for belonging"}</summary>
                                <div class="feature-desc">
                                    <p>{"Key phrases, etiquette and safe spots for every city we cover, in your pocket before you land."}</p>
                                </div>
                            </details>
                        </li>
                    </ul>
                </div>
            </section>

            <VideoContentSection
                title="Guest Handbook"
                subtitle="Your passport to belonging. Everything you need to explore African cities with confidence, from key phrases to etiquette and safe spots."
                video="/videos/handbook.mp4"
                list_items={vec![
                    "Navigate easily".to_string(),
                    "Connect authentically".to_string(),
                    "Access help when needed".to_string(),
                ]}
                section_id="guestbook-section"
                looped={false}
            />

            <section class="cta-section">
                <h2>{"Ready to experience the continent differently?"}</h2>
                <p>{"Be first in line when we open the doors."}</p>
                <button class="hero-cta primary" onclick={open_form_modal}>
                    {"Join the Waitlist"}
                </button>
            </section>

            <section class="how-to-join" id="how-to-join-section">
                <h2>{"How do you want to experience Karibu?"}</h2>
                <div class="join-grid">
                    <JoinCard
                        user_type={UserType::Host}
                        title="Host"
                        tagline="Share your home. Earn from it."
                        body="Open your doors to the world. List your property, welcome global guests, and earn income while Karibu handles bookings, payments and support."
                        cta="Become a Host"
                        on_select={on_user_type_selected.clone()}
                    />
                    <JoinCard
                        user_type={UserType::Guest}
                        title="Guest"
                        tagline="Explore Africa. Stay connected."
                        body="Discover unique homes, authentic stays and cultural experiences across Africa. Booking is simple, payments are secure, and every trip feels like home."
                        cta="Join Now"
                        on_select={on_user_type_selected.clone()}
                    />
                    <JoinCard
                        user_type={UserType::Associate}
                        title="Associate"
                        tagline="Represent. Guide. Earn globally."
                        body="Step into hospitality as a certified associate. Build global guest connections, represent Karibu professionally, work remotely, and earn."
                        cta="Become an Associate"
                        on_select={on_user_type_selected}
                    />
                </div>
            </section>

            <section class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqItem question="What is Karibu?">
                    <p>{"A hospitality platform connecting hosts, guests and local associates across African cities — stays, experiences and payments in one place."}</p>
                </FaqItem>
                <FaqItem question="When does Karibu launch?">
                    <p>{"We are onboarding city by city. Joining the waitlist puts you first in line when your city opens."}</p>
                </FaqItem>
                <FaqItem question="What does joining the waitlist commit me to?">
                    <p>{"Nothing. We will reach out with early access and you decide from there."}</p>
                </FaqItem>
                <FaqItem question="How do payments work?">
                    <p>{"Karibu Cowries are held at a fixed USD valuation and can be spent, shared or withdrawn in any African currency."}</p>
                </FaqItem>
                <FaqItem question="How do I become an associate?">
                    <p>{"Pick Associate in the section above and leave your details — the certification program opens alongside each city launch."}</p>
                </FaqItem>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <span class="footer-brand">{"Karibu"}</span>
                    <p class="footer-line">{"Don’t just visit Africa. Connect with it."}</p>
                    <div class="footer-social">
                        <a href="https://x.com/joinkaribu" target="_blank" rel="noopener noreferrer">{"X"}</a>
                        <a href="https://instagram.com/joinkaribu" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href="https://linkedin.com/company/joinkaribu" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                    <p class="footer-legal">{"© 2026 Karibu. All rights reserved."}</p>
                </div>
            </footer>

            <Modal
                is_open={modals.is_open(ModalKind::WaitlistForm)}
                on_close={close_form_modal}
            >
                <WaitlistForm session={session.clone()} />
            </Modal>

            <Modal
                size={ModalSize::Lg}
                is_open={modals.is_open(ModalKind::VideoShowcase)}
                on_close={close_video_modal}
            >
                <div class="video-showcase">
                    <video
                        src="/videos/showcase.mp4"
                        controls=true
                        autoplay=true
                        playsinline=true
                    />
                </div>
            </Modal>

            <Modal
                is_open={modals.is_open(ModalKind::JoinSelector)}
                on_close={close_join_modal}
            >
                <div class="join-signup">
                    <h2>{modals.selected_user_type.join_heading()}</h2>
                    <p>{modals.selected_user_type.join_blurb()}</p>
                    <WaitlistForm session={session.clone()} />
                </div>
            </Modal>

            <style>
            {r#".landing-page {
                min-height: 100vh;
                background: #fff;
            }
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 40;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem 2rem;
            }
            .nav-brand {
                font-size: 1.4rem;
                font-weight: 700;
                color: #fff;
                letter-spacing: 0.04em;
            }
            .nav-join {
                padding: 0.5rem 1.1rem;
                font-size: 0.95rem;
                color: #fff;
                background: rgba(255, 255, 255, 0.15);
                border: 1px solid rgba(255, 255, 255, 0.5);
                border-radius: 7px;
                cursor: pointer;
                transition: background 0.2s ease;
            }
            .nav-join:hover {
                background: rgba(255, 255, 255, 0.3);
            }
            .hero {
                position: relative;
                height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
            }
            .hero-video {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .hero-overlay {
                position: absolute;
                inset: 0;
                background: rgba(0, 0, 0, 0.25);
            }
            .hero-content {
                position: relative;
                z-index: 1;
                max-width: 60rem;
                padding: 1.25rem;
                margin: 0 auto;
                text-align: center;
            }
            .hero-headline h1 {
                font-size: clamp(2.2rem, 7vw, 5.5rem);
                color: #fff;
                margin: 0 0 0.2rem;
                font-weight: 500;
                letter-spacing: -0.02em;
                line-height: 1.1;
            }
            .hero-description {
                font-size: 1.1rem;
                color: #fff;
                font-weight: 300;
                letter-spacing: 0.02em;
                line-height: 1.6;
                max-width: 44rem;
                margin: 1.5rem auto 2.5rem;
            }
            .hero-cta-group {
                display: flex;
                flex-wrap: wrap;
                gap: 1rem;
                justify-content: center;
                margin-bottom: 4rem;
            }
            .hero-cta {
                padding: 0.75rem 1.5rem;
                font-size: 1.05rem;
                border-radius: 7px;
                cursor: pointer;
                box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2);
                transition: background 0.2s ease;
            }
            .hero-cta.primary {
                color: #fff;
                background: #8B5E3C;
                border: none;
            }
            .hero-cta.primary:hover {
                background: #75492E;
            }
            .hero-cta.secondary {
                color: #8B5E3C;
                background: #fff;
                border: 1px solid #8B5E3C;
            }
            .hero-cta.secondary:hover {
                background: #f3ede8;
            }
            .hero-arrow {
                font-size: 2rem;
                color: #fff;
                background: none;
                border: none;
                cursor: pointer;
                animation: hero-bounce 1s infinite;
            }
            @keyframes hero-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(0.4rem); }
            }
            .video-content-section {
                padding: 4rem 2rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .video-content-row {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
                align-items: center;
                margin-bottom: 3rem;
            }
            .video-content-row.reversed .video-content-text {
                order: 2;
            }
            .video-content-text h2 {
                font-size: 2.2rem;
                color: #2b2118;
                margin: 0 0 1rem;
            }
            .video-content-text p {
                color: #5b5048;
                line-height: 1.6;
            }
            .video-content-text ul {
                padding-left: 1.2rem;
                color: #5b5048;
                line-height: 1.9;
            }
            .video-content-media video {
                width: 100%;
                border-radius: 16px;
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15);
            }
            .features-section {
                background: #faf6f2;
                padding: 4rem 2rem;
            }
            .feature-list {
                max-width: 50rem;
                margin: 0 auto;
            }
            .feature-list h2 {
                font-size: 2.2rem;
                text-align: center;
                color: #2b2118;
                margin-bottom: 1.5rem;
            }
            .feature-list ul {
                list-style: none;
                padding: 0;
            }
            .feature-list li {
                margin-bottom: 1rem;
            }
            .feature-list summary {
                font-size: 1.15rem;
                color: #2b2118;
                cursor: pointer;
            }
            .feature-desc p {
                color: #5b5048;
                line-height: 1.6;
            }
            .cta-section {
                padding: 5rem 2rem;
                text-align: center;
            }
            .cta-section h2 {
                font-size: 2.2rem;
                color: #2b2118;
                margin: 0 0 0.5rem;
            }
            .cta-section p {
                color: #5b5048;
                margin-bottom: 2rem;
            }
            .how-to-join {
                padding: 4rem 1.25rem;
                max-width: 72rem;
                margin: 0 auto;
            }
            .how-to-join h2 {
                font-size: 2.2rem;
                text-align: center;
                color: #2b2118;
                margin-bottom: 4rem;
            }
            .join-grid {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            .join-card {
                display: flex;
                flex-direction: column;
                text-align: center;
                background: #fff;
                border: 1px solid #e5e0da;
                border-radius: 12px;
                padding: 2rem;
                box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                transition: box-shadow 0.3s ease;
            }
            .join-card:hover {
                box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
            }
            .join-card h3 {
                font-size: 1.5rem;
                color: #2b2118;
                margin: 0 0 0.75rem;
            }
            .join-tagline {
                font-size: 1.1rem;
                color: #5b5048;
                margin: 0 0 0.75rem;
            }
            .join-body {
                color: #5b5048;
                line-height: 1.6;
                margin-bottom: 1.5rem;
            }
            .join-cta {
                margin-top: auto;
                width: 100%;
                padding: 0.75rem;
                font-size: 1rem;
                font-weight: 600;
                color: #fff;
                background: #8B5E3C;
                border: none;
                border-radius: 8px;
                cursor: pointer;
                transition: background 0.2s ease;
            }
            .join-cta:hover {
                background: #75492E;
            }
            .join-signup h2 {
                color: #8B5E3C;
                margin: 0 0 0.5rem;
            }
            .join-signup > p {
                color: #5b5048;
                margin: 0 0 1rem;
            }
            .faq-section {
                padding: 4rem 1.25rem;
                max-width: 50rem;
                margin: 0 auto;
            }
            .faq-section h2 {
                font-size: 2.2rem;
                text-align: center;
                color: #2b2118;
                margin-bottom: 2rem;
            }
            .faq-item {
                border-bottom: 1px solid #e5e0da;
            }
            .faq-question {
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem 0;
                font-size: 1.1rem;
                color: #2b2118;
                background: none;
                border: none;
                cursor: pointer;
                text-align: left;
            }
            .faq-item .toggle-icon {
                font-size: 1.4rem;
                color: #8B5E3C;
            }
            .faq-answer p {
                color: #5b5048;
                line-height: 1.6;
                margin: 0 0 1rem;
            }
            .video-showcase video {
                width: 100%;
                border-radius: 12px;
            }
            .footer {
                background: #2b2118;
                padding: 3rem 2rem;
                text-align: center;
            }
            .footer-brand {
                font-size: 1.4rem;
                font-weight: 700;
                color: #fff;
                letter-spacing: 0.04em;
            }
            .footer-line {
                color: rgba(255, 255, 255, 0.7);
                margin: 0.75rem 0 1.5rem;
            }
            .footer-social {
                display: flex;
                gap: 1.5rem;
                justify-content: center;
                margin-bottom: 1.5rem;
            }
            .footer-social a {
                color: #fff;
                text-decoration: none;
                transition: color 0.2s ease;
            }
            .footer-social a:hover {
                color: #d9b99b;
            }
            .footer-legal {
                color: rgba(255, 255, 255, 0.5);
                font-size: 0.85rem;
                margin: 0;
            }
            @media (max-width: 768px) {
                .video-content-row {
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                .video-content-row.reversed .video-content-text {
                    order: 0;
                }
                .join-grid {
                    grid-template-columns: 1fr;
                }
                .hero-description {
                    padding: 0 0.5rem;
                }
            }"#}
            </style>
        </div>
    }
}
