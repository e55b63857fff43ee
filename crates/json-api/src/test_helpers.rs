//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tracker_app::{
    context::AppContext,
    domain::{chatbot::MockChatbotService, orders::MockOrdersService},
};

use crate::{errors, state::State};

pub(crate) use crate::orders::tests::{make_order, strict_orders_mock};

pub(crate) fn strict_chatbot_mock() -> MockChatbotService {
    let mut chatbot = MockChatbotService::new();

    chatbot.expect_relay().never();

    chatbot
}

fn state(orders: MockOrdersService, chatbot: MockChatbotService) -> Arc<State> {
    State::from_app_context(AppContext {
        orders: Arc::new(orders),
        chatbot: Arc::new(chatbot),
    })
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(orders, strict_chatbot_mock())))
            .push(route),
    )
    .catcher(errors::catcher())
}

pub(crate) fn chatbot_service(chatbot: MockChatbotService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_orders_mock(), chatbot)))
            .push(route),
    )
    .catcher(errors::catcher())
}
