use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::components::whatsapp_button::EnquireButton;
use crate::content::FAQS;
use crate::inquiry::deep_link::QuickEnquiry;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="page faq-page">
            <section class="page-hero">
                <span class="pill">{"FAQ"}</span>
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Find answers to common questions about our physiotherapy services, treatments, and what to expect during your visit."}</p>
            </section>

            <section class="page-section faq-section">
                {
                    FAQS.iter().enumerate().map(|(i, entry)| html! {
                        <FaqItem key={i} id={format!("faq-{}", i + 1)} question={entry.question}>
                            <p>{entry.answer}</p>
                        </FaqItem>
                    }).collect::<Html>()
                }
            </section>

            <section class="page-section faq-cta">
                <h2>{"Still have questions?"}</h2>
                <p>{"Can't find the answer you're looking for? Reach out to us on WhatsApp and we'll get back to you."}</p>
                <EnquireButton label="Ask on WhatsApp" text={QuickEnquiry::Question.text()} />
            </section>
            <style>
            {r#".faq-section {
                max-width: 800px;
            }
            .faq-item {
                border-bottom: 1px solid #e5e7eb;
            }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1.25rem 0;
                background: none;
                border: none;
                font: inherit;
                font-weight: 600;
                text-align: left;
                cursor: pointer;
            }
            .faq-answer {
                display: none;
                padding-bottom: 1.25rem;
                color: #4b5563;
            }
            .faq-item.open .faq-answer {
                display: block;
            }
            .faq-cta {
                text-align: center;
            }"#}
            </style>
        </div>
    }
}
