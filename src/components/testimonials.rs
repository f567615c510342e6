use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="home-section testimonials-section">
            <span class="pill">{"Patient Stories"}</span>
            <h2>{"What Our Patients Say"}</h2>
            <p class="section-lead">
                {"Real experiences from patients who trusted us with their recovery journey."}
            </p>
            <div class="card-grid">
                {
                    TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial-card" key={t.name}>
                            <div class="testimonial-rating" aria-label={format!("{} out of 5", t.rating)}>
                                { ("★".repeat(t.rating as usize)) }
                            </div>
                            <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                            <figcaption>
                                <span class="testimonial-avatar">{t.initials()}</span>
                                <span>
                                    <strong>{t.name}</strong>
                                    <small>{t.treated_for}</small>
                                </span>
                            </figcaption>
                        </figure>
                    }).collect::<Html>()
                }
            </div>
            <style>
            {r#".testimonial-card {
                margin: 0;
                border: 1px solid #e5e7eb;
                border-radius: 16px;
                padding: 1.5rem;
                background: #fff;
            }
            .testimonial-rating {
                color: #f59e0b;
                letter-spacing: 0.15em;
            }
            .testimonial-card blockquote {
                margin: 1rem 0 1.5rem;
                line-height: 1.6;
            }
            .testimonial-card figcaption {
                display: flex;
                align-items: center;
                gap: 0.75rem;
            }
            .testimonial-card small {
                display: block;
                color: #6b7280;
            }
            .testimonial-avatar {
                width: 3rem;
                height: 3rem;
                border-radius: 50%;
                display: inline-flex;
                align-items: center;
                justify-content: center;
                background: #0d9488;
                color: #fff;
                font-weight: 600;
            }"#}
            </style>
        </section>
    }
}
