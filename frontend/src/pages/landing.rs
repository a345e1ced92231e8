use chrono::Datelike;
use yew::prelude::*;

use crate::backdrop::BackdropDemo;
use crate::content::{
    self, CategoryFilter, Feature, Product, COMPANY_NAME, CONTACT_EMAIL, FEATURES, HERO_IMAGE, HOME_SECTION,
    MARKET_DATA, NAV_ENTRIES, PROBLEMS, PRODUCTS, TAGLINE,
};
use crate::market_chart::MarketChart;
use crate::nav::{scroll_to_section, Nav};
use crate::on_screen::AnimateOnVisible;
use crate::scroll_spy::use_scroll_spy;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One full-viewport block of the page. The scroll spy finds it by `id`.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id} class={classes!("page-section", props.class.clone())}>
            <div class="section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let active_section = use_scroll_spy(content::section_ids(), HOME_SECTION);
    let active_filter = use_state(CategoryFilter::default);

    let go_to_problem = Callback::from(|_: MouseEvent| scroll_to_section("problem"));

    let filter_buttons: Html = content::category_filters(PRODUCTS)
        .into_iter()
        .map(|filter| {
            let onclick = {
                let active_filter = active_filter.clone();
                Callback::from(move |_: MouseEvent| active_filter.set(filter))
            };
            html! {
                <button
                    key={filter.label()}
                    class={classes!("filter-pill", (*active_filter == filter).then(|| "active"))}
                    onclick={onclick}
                >
                    {filter.label()}
                </button>
            }
        })
        .collect();

    let products: Html = content::filter_products(PRODUCTS, *active_filter)
        .into_iter()
        .enumerate()
        .map(|(index, product)| render_product(index, product))
        .collect();

    let features: Html = FEATURES
        .iter()
        .enumerate()
        .map(|(index, feature)| render_feature(index, feature))
        .collect();

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Nav entries={NAV_ENTRIES} active={active_section} />
            <main>
                <Section id="home" class={classes!("hero")}>
                    <div class="hero-background">
                        <img src={HERO_IMAGE} alt="Joyful event" />
                        <div class="hero-gradient"></div>
                    </div>
                    <div class="hero-content">
                        <AnimateOnVisible>
                            <h1 class="hero-title">{COMPANY_NAME}</h1>
                        </AnimateOnVisible>
                        <AnimateOnVisible delay_ms={200}>
                            <p class="hero-subtitle">{TAGLINE}</p>
                        </AnimateOnVisible>
                        <AnimateOnVisible delay_ms={400}>
                            <button class="hero-cta" onclick={go_to_problem.clone()}>{"Explore Our Vision"}</button>
                        </AnimateOnVisible>
                    </div>
                    <div class="scroll-hint" onclick={go_to_problem}>{"↓"}</div>
                </Section>

                <Section id="problem">
                    <AnimateOnVisible class={classes!("centered")}>
                        <h2 class="section-title">{"Events are Fleeting."}</h2>
                        <p class="section-kicker">{"Memories Shouldn't Be."}</p>
                        <div class="card-grid three">
                            { for PROBLEMS.iter().map(|problem| html! {
                                <div class="card">
                                    <h3>{problem.title}</h3>
                                    <p>{problem.body}</p>
                                </div>
                            }) }
                        </div>
                    </AnimateOnVisible>
                </Section>

                <Section id="solution">
                    <AnimateOnVisible class={classes!("centered")}>
                        <h2 class="section-title">{"The Next Generation of Photo Experiences"}</h2>
                        <p class="section-lead">
                            {"Explore our curated collection of modern photo booth solutions designed to maximize guest interaction, social sharing, and brand visibility."}
                        </p>
                    </AnimateOnVisible>
                    <AnimateOnVisible class={classes!("filter-bar")} delay_ms={200}>
                        { filter_buttons }
                    </AnimateOnVisible>
                    <div class="card-grid three">
                        { products }
                    </div>
                </Section>

                <Section id="features">
                    <AnimateOnVisible class={classes!("centered")}>
                        <h2 class="section-title">{"Packed with Features"}</h2>
                        <p class="section-lead">{"Technology that creates smiles, sparks creativity, and amplifies the fun."}</p>
                    </AnimateOnVisible>
                    <div class="card-grid three">
                        { features }
                    </div>
                </Section>

                <Section id="market">
                    <AnimateOnVisible class={classes!("centered")}>
                        <h2 class="section-title">{"A Booming Market"}</h2>
                        <p class="section-lead">
                            {"The demand for unique event experiences is at an all-time high across multiple sectors."}
                        </p>
                    </AnimateOnVisible>
                    <AnimateOnVisible class={classes!("chart-frame")} delay_ms={200}>
                        <MarketChart data={MARKET_DATA} />
                    </AnimateOnVisible>
                </Section>

                <Section id="demo">
                    <BackdropDemo />
                </Section>

                <Section id="contact" class={classes!("contact")}>
                    <AnimateOnVisible class={classes!("centered")}>
                        <h2 class="section-title">{"Let's Create Together"}</h2>
                        <p class="section-lead">
                            {"Ready to make your next event unforgettable? Reach out to us for a personalized quote and consultation."}
                        </p>
                        <div class="contact-actions">
                            <a href={format!("mailto:{}", CONTACT_EMAIL)} class="hero-cta">{"Get a Quote"}</a>
                            <p>{"or email us at "}<span class="contact-email">{CONTACT_EMAIL}</span></p>
                        </div>
                    </AnimateOnVisible>
                </Section>
            </main>

            <footer class="site-footer">
                <p>{format!("© {} {}. All Rights Reserved.", year, COMPANY_NAME)}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #000;
                    color: #fff;
                    overflow-x: hidden;
                }
                .page-section {
                    min-height: 100vh;
                    width: 100%;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 4rem;
                }
                .section-inner {
                    max-width: 80rem;
                    width: 100%;
                    margin: 0 auto;
                }
                .centered {
                    text-align: center;
                }
                .section-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 1rem 0;
                }
                .section-kicker {
                    font-size: 1.875rem;
                    color: #d1d5db;
                    margin-bottom: 3rem;
                }
                .section-lead {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    font-size: 1.125rem;
                    color: #d1d5db;
                }
                .hero {
                    position: relative;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.1;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, transparent);
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                }
                .hero-title {
                    font-size: 6rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    margin-bottom: 1rem;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    color: #d1d5db;
                }
                .hero-cta {
                    display: inline-block;
                    background: #fff;
                    color: #000;
                    font-weight: 700;
                    font-size: 1.125rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.3s ease, background-color 0.3s ease;
                }
                .hero-cta:hover {
                    background: #e5e7eb;
                    transform: scale(1.05);
                }
                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 2rem;
                    color: #9ca3af;
                    cursor: pointer;
                    animation: bounce 1s infinite;
                }
                @keyframes bounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                    text-align: left;
                }
                .card-grid.three {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }
                .card {
                    background: #111827;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                }
                .card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }
                .card p {
                    color: #9ca3af;
                }
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }
                .filter-pill {
                    text-transform: capitalize;
                    padding: 0.5rem 1.25rem;
                    border: none;
                    border-radius: 9999px;
                    font-weight: 500;
                    background: #1f2937;
                    color: #d1d5db;
                    cursor: pointer;
                    transition: all 0.3s ease-in-out;
                }
                .filter-pill:hover {
                    background: #374151;
                    transform: scale(1.05);
                }
                .filter-pill.active {
                    background: #fff;
                    color: #000;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }
                .product-card {
                    background: #111827;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .product-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px rgba(255, 255, 255, 0.1);
                }
                .product-card img {
                    width: 100%;
                    height: 14rem;
                    object-fit: cover;
                }
                .product-body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                }
                .product-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }
                .product-heading h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }
                .product-icon, .feature-icon {
                    font-size: 2rem;
                }
                .product-vibe {
                    font-style: italic;
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }
                .product-details {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    flex-grow: 1;
                }
                .product-details strong {
                    color: #e5e7eb;
                }
                .feature-card {
                    text-align: center;
                }
                .chart-frame {
                    height: 24rem;
                    width: 100%;
                }
                .market-chart {
                    width: 100%;
                    height: 100%;
                }
                .backdrop-demo {
                    text-align: center;
                }
                .backdrop-demo-icon {
                    font-size: 4rem;
                }
                .backdrop-form-wrapper {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .backdrop-form {
                    display: flex;
                    gap: 1rem;
                }
                .backdrop-form input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    background: #1f2937;
                    color: #fff;
                    border: 2px solid #374151;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .backdrop-form input:focus {
                    outline: none;
                    border-color: #fff;
                }
                .backdrop-form button {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: #fff;
                    color: #000;
                    font-weight: 700;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .backdrop-form button:disabled {
                    background: #6b7280;
                    cursor: not-allowed;
                }
                .spinner {
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 3px solid rgba(0, 0, 0, 0.25);
                    border-top-color: #000;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .backdrop-message {
                    color: #d1d5db;
                    margin-top: 1rem;
                }
                .backdrop-result {
                    margin: 3rem auto 0;
                    max-width: 64rem;
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 2rem;
                    align-items: center;
                    text-align: left;
                }
                .backdrop-image img, .backdrop-image-placeholder {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    border-radius: 0.5rem;
                }
                .backdrop-image img {
                    object-fit: cover;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .backdrop-image-placeholder {
                    background: #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #9ca3af;
                    animation: pulse 2s ease-in-out infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.6; }
                }
                .backdrop-pending {
                    color: #9ca3af;
                }
                .backdrop-idea h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .backdrop-idea p {
                    color: #d1d5db;
                }
                .contact {
                    background: #111827;
                }
                .contact-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    color: #9ca3af;
                    font-size: 1.125rem;
                }
                .contact-email {
                    color: #fff;
                    font-weight: 600;
                }
                .site-footer {
                    text-align: center;
                    padding: 1.5rem;
                    border-top: 1px solid #111827;
                    color: #6b7280;
                }
                .reveal-pending {
                    opacity: 0;
                }
                .fade-in-up {
                    opacity: 0;
                    animation: fadeInUp 0.8s ease-out forwards;
                }
                @keyframes fadeInUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                @media (max-width: 768px) {
                    .page-section {
                        padding: 2rem;
                    }
                    .hero-title {
                        font-size: 3rem;
                    }
                    .section-title {
                        font-size: 2.25rem;
                    }
                    .card-grid.three, .backdrop-result {
                        grid-template-columns: 1fr;
                    }
                    .backdrop-form, .contact-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn render_product(index: usize, product: &Product) -> Html {
    html! {
        <AnimateOnVisible key={product.name} delay_ms={(index as u32) * 100}>
            <div class="product-card" title={product.mechanic}>
                <img src={product.image} alt={product.name} loading="lazy" />
                <div class="product-body">
                    <div class="product-heading">
                        <span class="product-icon">{product.icon.glyph()}</span>
                        <h3>{product.name}</h3>
                    </div>
                    <p class="product-vibe">{product.vibe}</p>
                    <div class="product-details">
                        <p><strong>{"Features: "}</strong>{product.features}</p>
                        <p><strong>{"Ideal For: "}</strong>{product.ideal_for}</p>
                        <p><strong>{"Delivery: "}</strong>{product.delivery}</p>
                    </div>
                </div>
            </div>
        </AnimateOnVisible>
    }
}

fn render_feature(index: usize, feature: &Feature) -> Html {
    html! {
        <AnimateOnVisible key={feature.name} class={classes!("card", "feature-card")} delay_ms={(index as u32) * 100}>
            <div class="feature-icon">{feature.icon.glyph()}</div>
            <h3>{feature.name}</h3>
            <p>{feature.description}</p>
        </AnimateOnVisible>
    }
}
