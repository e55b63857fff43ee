//! Static informational pages.

use leptos::prelude::*;

use crate::routes::Page;

#[derive(Debug)]
struct Feature {
    title: &'static str,
    text: &'static str,
}

const HOME_FEATURES: [Feature; 3] = [
    Feature {
        title: "Real-time Tracking",
        text: "Get live updates on your order status from pending to delivered.",
    },
    Feature {
        title: "Easy Management",
        text: "Add, update, and delete orders effortlessly from the dashboard.",
    },
    Feature {
        title: "Customer Friendly",
        text: "Manage all your customers and their orders in one place.",
    },
];

const ABOUT_CARDS: [Feature; 6] = [
    Feature {
        title: "Our Mission",
        text: "To simplify online order tracking and delivery management for businesses and customers.",
    },
    Feature {
        title: "Our Features",
        text: "Create orders, update delivery status, track all orders, and interact with ChatBot support.",
    },
    Feature {
        title: "Why Choose Us?",
        text: "Real-time updates, easy-to-use interface, and a chatbot to answer all order-related queries.",
    },
    Feature {
        title: "Customer Friendly",
        text: "Keep your customers informed with order status updates and seamless tracking.",
    },
    Feature {
        title: "Efficiency",
        text: "Manage multiple orders easily and save time with automated status tracking.",
    },
    Feature {
        title: "Support",
        text: "Our ChatBot is available to answer all your questions instantly and efficiently.",
    },
];

const CONTACT_CHANNELS: [Feature; 3] = [
    Feature {
        title: "Email",
        text: "support@ordertracker.com",
    },
    Feature {
        title: "Phone",
        text: "+1 (555) 123-4567",
    },
    Feature {
        title: "Hours",
        text: "Mon-Fri: 9AM-6PM",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1>"Welcome to Online Order Tracker"</h1>
                <p class="lead">
                    "Track your orders in real-time and manage your deliveries efficiently."
                </p>
                <a class="button button-light" href={Page::Orders.href()}>
                    "View Orders"
                </a>
            </div>
        </section>
        <section class="features">
            <div class="container">
                <h2>"Why Choose Us?"</h2>
                <div class="grid grid-3">
                    {HOME_FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <h3>{feature.title}</h3>
                                    <p>{feature.text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="container">
            <h1 class="page-title">"About Online Order Tracker"</h1>
            <div class="grid grid-3">
                {ABOUT_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="card">
                                <h3>{card.title}</h3>
                                <p>{card.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Contact details only; there is no endpoint that accepts contact messages.
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="container narrow">
            <h1 class="page-title">"Contact Us"</h1>
            <p class="lead">"Have a question or need support? We'd love to hear from you!"</p>
            <p>"For questions about an order, the chat assistant in the corner is the fastest route."</p>
            <div class="grid grid-3">
                {CONTACT_CHANNELS
                    .iter()
                    .map(|channel| {
                        view! {
                            <div class="contact-channel">
                                <small>{channel.title}</small>
                                <p>{channel.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
