use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::milestones::Milestones;
use crate::countup::Stat;

// Marketing copy keeps the separators and "+" suffix; Stat::parse strips them
// before the numbers animate.
const STATS: [(&str, &str); 3] = [
    ("450+", "Homes"),
    ("1000+", "Travellers"),
    ("10,000+", "Nights booked"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let email = use_state(String::new);

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo_console::log!("Email submitted:", (*email).clone());
        })
    };

    let stats: Vec<Stat> = STATS
        .iter()
        .filter_map(|(value, label)| match Stat::parse(value, label) {
            Ok(stat) => Some(stat),
            Err(err) => {
                gloo_console::error!(format!("dropping milestone {}: {}", label, err));
                None
            }
        })
        .collect();

    html! {
        <div class="landing-page">
            // Hero Section
            <section class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>
                        {"One pass, make everywhere"}
                        <br/>
                        {"your home "}
                        <i class="globe-icon spin-slow"></i>
                    </h1>
                    <p class="hero-tagline">{"— COMING SOON —"}</p>
                    <p class="hero-subtitle">
                        {"Get early access now ⚡️ Be the first to get notified"}
                    </p>
                    <form onsubmit={onsubmit} class="email-capture">
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            onchange={let email = email.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                email.set(input.value());
                            }}
                        />
                        <button type="submit">{"Join Us"}</button>
                    </form>
                    <i class="chevron-down-icon bounce"></i>
                </div>
            </section>

            // Features Section
            <section class="features">
                <div class="features-grid">
                    <div class="feature-item">
                        <div class="feature-icon">
                            <img src="/assets/easy-booking.png" loading="lazy" alt="Easy Booking" />
                        </div>
                        <h3>{"Easy Booking"}</h3>
                        <p>{"Book mid-term stays with just a few clicks"}</p>
                    </div>
                    <div class="feature-item">
                        <div class="feature-icon">
                            <img src="/assets/verified-homes.png" loading="lazy" alt="Verified Homes" />
                        </div>
                        <h3>{"Verified Homes"}</h3>
                        <p>{"Every property is thoroughly vetted"}</p>
                    </div>
                    <div class="feature-item">
                        <div class="feature-icon">
                            <img src="/assets/flexible-terms.png" loading="lazy" alt="Flexible Terms" />
                        </div>
                        <h3>{"Flexible Terms"}</h3>
                        <p>{"Tailored solutions for digital nomads"}</p>
                    </div>
                </div>
            </section>

            <Milestones stats={stats} />

            <Footer />
        </div>
    }
}
