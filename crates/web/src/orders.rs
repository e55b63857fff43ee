//! Orders view: table, inline status edits, deletion and the creation modal.

use leptos::{prelude::*, task};
use uuid::Uuid;

use tracker_client::{
    ApiClient, ClientError,
    models::{NewOrder, Order, OrderStatus, OrderUpdate},
};

const FIELDS_REQUIRED: &str = "All fields are required";
const QUANTITY_TOO_LOW: &str = "Quantity must be at least 1";
const CREATE_FAILED: &str = "Failed to add order";
const SESSION_EXPIRED: &str = "Your session has expired. Please sign in again.";

/// Check the creation form before anything is sent.
fn validate_new_order(
    customer_name: &str,
    product: &str,
    quantity: &str,
) -> Result<NewOrder, &'static str> {
    let customer_name = customer_name.trim();
    let product = product.trim();
    let quantity = quantity.trim();

    if customer_name.is_empty() || product.is_empty() || quantity.is_empty() {
        return Err(FIELDS_REQUIRED);
    }

    let quantity = quantity
        .parse::<i32>()
        .ok()
        .filter(|quantity| *quantity >= 1)
        .ok_or(QUANTITY_TOO_LOW)?;

    Ok(NewOrder {
        customer_name: customer_name.to_string(),
        product: product.to_string(),
        quantity: Some(quantity),
    })
}

fn replace_order(orders: &mut [Order], updated: Order) {
    if let Some(slot) = orders.iter_mut().find(|order| order.id == updated.id) {
        *slot = updated;
    }
}

fn remove_order(orders: &mut Vec<Order>, id: Uuid) {
    orders.retain(|order| order.id != id);
}

#[cfg(target_arch = "wasm32")]
fn confirm_delete() -> bool {
    window()
        .confirm_with_message("Delete this order?")
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_delete() -> bool {
    false
}

/// Page-wide signals.
#[derive(Debug, Clone, Copy)]
struct OrdersState {
    orders: RwSignal<Vec<Order>>,
    notice: RwSignal<Option<&'static str>>,
}

impl OrdersState {
    /// Failures outside the creation form are logged; an expired session is also shown.
    fn report(self, action: &str, error: &ClientError) {
        leptos::logging::error!("Failed to {action}: {error}");

        if matches!(error, ClientError::Unauthorized) {
            self.notice.set(Some(SESSION_EXPIRED));
        }
    }
}

fn load_orders(client: ApiClient, state: OrdersState) {
    task::spawn_local(async move {
        match client.orders().list().await {
            Ok(orders) => state.orders.set(orders),
            Err(error) => state.report("fetch orders", &error),
        }
    });
}

fn change_status(client: ApiClient, state: OrdersState, id: Uuid, label: &str) {
    let status = match label.parse::<OrderStatus>() {
        Ok(status) => status,
        Err(error) => {
            leptos::logging::warn!("{error}");
            return;
        }
    };

    task::spawn_local(async move {
        match client
            .orders()
            .update(id, &OrderUpdate::status(status))
            .await
        {
            Ok(updated) => state.orders.update(|orders| replace_order(orders, updated)),
            Err(error) => state.report("update status", &error),
        }
    });
}

fn delete_order(client: ApiClient, state: OrdersState, id: Uuid) {
    if !confirm_delete() {
        return;
    }

    task::spawn_local(async move {
        match client.orders().delete(id).await {
            Ok(_) => state.orders.update(|orders| remove_order(orders, id)),
            Err(error) => state.report("delete order", &error),
        }
    });
}

#[component]
fn OrderRow(client: ApiClient, state: OrdersState, order: Order) -> impl IntoView {
    let id = order.id;
    let current = order.status;
    let client_for_delete = client.clone();

    view! {
        <tr>
            <td>{order.order_id}</td>
            <td>{order.customer_name}</td>
            <td>{order.product}</td>
            <td>{order.quantity}</td>
            <td>
                <select
                    class="status-select"
                    aria-label="Order status"
                    on:change=move |event| {
                        change_status(client.clone(), state, id, &event_target_value(&event));
                    }
                >
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value={status.as_str()} selected={status == current}>
                                    {status.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td>
                <button
                    type="button"
                    class="button button-danger button-small"
                    on:click=move |_| delete_order(client_for_delete.clone(), state, id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AddOrderModal(client: ApiClient, state: OrdersState, show: RwSignal<bool>) -> impl IntoView {
    let customer_name = RwSignal::new(String::new());
    let product = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());
    let error = RwSignal::new(None::<String>);

    let submit = move |_: leptos::ev::MouseEvent| {
        let new_order = match validate_new_order(
            &customer_name.get_untracked(),
            &product.get_untracked(),
            &quantity.get_untracked(),
        ) {
            Ok(new_order) => new_order,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        let client = client.clone();

        task::spawn_local(async move {
            match client.orders().create(&new_order).await {
                Ok(created) => {
                    state.orders.update(|orders| orders.insert(0, created));
                    customer_name.set(String::new());
                    product.set(String::new());
                    quantity.set("1".to_string());
                    error.set(None);
                    show.set(false);
                }
                Err(failure) => {
                    leptos::logging::error!("Failed to add order: {failure}");
                    error.set(Some(failure.user_message(CREATE_FAILED).to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-label="Add New Order">
                <div class="modal-header">
                    <h2>"Add New Order"</h2>
                    <button
                        type="button"
                        class="close-btn"
                        aria-label="Close"
                        on:click=move |_| show.set(false)
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
                    <label>
                        "Customer Name"
                        <input
                            type="text"
                            prop:value=move || customer_name.get()
                            on:input=move |event| customer_name.set(event_target_value(&event))
                        />
                    </label>
                    <label>
                        "Product"
                        <input
                            type="text"
                            prop:value=move || product.get()
                            on:input=move |event| product.set(event_target_value(&event))
                        />
                    </label>
                    <label>
                        "Quantity"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || quantity.get()
                            on:input=move |event| quantity.set(event_target_value(&event))
                        />
                    </label>
                    <button type="button" class="button button-primary" on:click=submit>
                        "Add Order"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Orders page.
#[component]
pub fn OrdersPage(
    /// Client used for every order call.
    client: ApiClient,
) -> impl IntoView {
    let state = OrdersState {
        orders: RwSignal::new(Vec::new()),
        notice: RwSignal::new(None),
    };
    let show_modal = RwSignal::new(false);
    let rows_client = client.clone();
    let modal_client = client.clone();

    load_orders(client, state);

    view! {
        <section class="container">
            <h1 class="page-title">"Orders"</h1>
            {move || state.notice.get().map(|notice| view! { <p class="notice">{notice}</p> })}
            <button
                type="button"
                class="button button-primary"
                on:click=move |_| show_modal.set(true)
            >
                "Add New Order"
            </button>
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Order ID"</th>
                        <th>"Customer"</th>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .orders
                            .get()
                            .into_iter()
                            .map(|order| {
                                view! { <OrderRow client={rows_client.clone()} state=state order=order /> }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || {
                if show_modal.get() {
                    view! { <AddOrderModal client={modal_client.clone()} state=state show=show_modal /> }
                        .into_any()
                } else {
                    ().into_any()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn order(id: Uuid, status: OrderStatus) -> Order {
        Order {
            id,
            order_id: "3b241101-e2bb-4255-8caf-4136c566a962".to_string(),
            customer_name: "Alice".to_string(),
            product: "Widget".to_string(),
            quantity: 1,
            status,
            created_at: "2026-10-19T12:00:00Z".to_string(),
            updated_at: "2026-10-19T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_new_order() -> TestResult {
        let new_order = validate_new_order(" Alice ", "Widget", "3")?;

        assert_eq!(
            new_order,
            NewOrder {
                customer_name: "Alice".to_string(),
                product: "Widget".to_string(),
                quantity: Some(3),
            }
        );

        Ok(())
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(validate_new_order("", "Widget", "1"), Err(FIELDS_REQUIRED));
        assert_eq!(validate_new_order("Alice", "  ", "1"), Err(FIELDS_REQUIRED));
        assert_eq!(validate_new_order("Alice", "Widget", ""), Err(FIELDS_REQUIRED));
    }

    #[test]
    fn quantity_must_be_positive_integer() {
        assert_eq!(validate_new_order("Alice", "Widget", "0"), Err(QUANTITY_TOO_LOW));
        assert_eq!(validate_new_order("Alice", "Widget", "-2"), Err(QUANTITY_TOO_LOW));
        assert_eq!(validate_new_order("Alice", "Widget", "1.5"), Err(QUANTITY_TOO_LOW));
    }

    #[test]
    fn replace_swaps_matching_order_only() {
        let first = Uuid::from_u128(1);
        let second = Uuid::from_u128(2);
        let mut orders = vec![
            order(first, OrderStatus::Pending),
            order(second, OrderStatus::Pending),
        ];

        replace_order(&mut orders, order(second, OrderStatus::Delivered));

        assert_eq!(
            orders.iter().map(|order| order.status).collect::<Vec<_>>(),
            vec![OrderStatus::Pending, OrderStatus::Delivered]
        );
    }

    #[test]
    fn remove_drops_matching_order() {
        let keep = Uuid::from_u128(1);
        let drop_id = Uuid::from_u128(2);
        let mut orders = vec![
            order(keep, OrderStatus::Pending),
            order(drop_id, OrderStatus::Shipped),
        ];

        remove_order(&mut orders, drop_id);

        assert_eq!(
            orders.iter().map(|order| order.id).collect::<Vec<_>>(),
            vec![keep]
        );
    }
}
