use yew::prelude::*;

use crate::components::contact_details::ContactDetails;
use crate::components::contact_form::ContactForm;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <span class="pill">{"Contact Us"}</span>
                <h1>{"Get in Touch with Our Team"}</h1>
                <p>{"Have questions or ready to book your appointment? We're here to help. Reach out via WhatsApp for the quickest response!"}</p>
            </section>

            <section class="page-section contact-layout">
                <div>
                    <h2>{"Contact Information"}</h2>
                    <ContactDetails />
                    <div class="map-frame">
                        <iframe
                            src="https://www.google.com/maps?q=Surya+Kiran+Physiotherapy+Kadakkal&output=embed"
                            width="100%"
                            height="300"
                            loading="lazy"
                            title="Clinic Location"
                        />
                    </div>
                </div>
                <ContactForm />
            </section>
            <style>
            {r#".contact-layout {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                gap: 3rem;
            }
            .map-frame {
                margin-top: 2.5rem;
                border-radius: 16px;
                overflow: hidden;
                border: 1px solid #e5e7eb;
            }
            .map-frame iframe {
                border: 0;
            }"#}
            </style>
        </div>
    }
}
