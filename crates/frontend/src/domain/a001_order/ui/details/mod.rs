mod items;

use super::state::DashboardState;
use super::view_model::OrderDetailsVm;
use chrono::Local;
use items::OrderItems;
use leptos::prelude::*;
use thaw::*;

/// Поле формы только для чтения
#[component]
fn ReadonlyField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Input value=RwSignal::new(value) attr:readonly=true />
        </div>
    }
}

/// Панель деталей выбранного заказа.
///
/// Данные берутся из заказа, уже загруженного со страницей.
#[component]
pub fn OrderDetails(state: RwSignal<DashboardState>) -> impl IntoView {
    let details = Memo::new(move |_| {
        state.with(|s| {
            s.selected_order()
                .map(|o| OrderDetailsVm::from_order(o, &Local))
        })
    });

    view! {
        {move || {
            let Some(vm) = details.get() else {
                return view! {
                    <h4 class="text-very-light">"Selecione um pedido para ver os detalhes"</h4>
                }.into_any();
            };

            let delivery = vm.delivery.clone().map(|d| view! {
                <div class="detail-grid__row">
                    <ReadonlyField label="Data de Entrega" value=d.delivered_at />
                    <ReadonlyField label="Time de Entrega" value=d.team />
                </div>
            });

            view! {
                <div class="order-details">
                    <h3 class="details-section__title">
                        "Detalhes do pedido " <code>{format!("#{}", vm.number)}</code>
                    </h3>

                    <div class="detail-grid__row">
                        <ReadonlyField label="Número do Pedido" value=vm.number.clone() />
                        <ReadonlyField label="Data de Criação do Pedido" value=vm.created_at.clone() />
                    </div>
                    <ReadonlyField label="Endereço" value=vm.address.clone() />
                    <div class="detail-grid__row">
                        <ReadonlyField label="Status" value=vm.status.to_string() />
                        <ReadonlyField label="Valor Total" value=vm.total.clone() />
                    </div>
                    {delivery}

                    <h5 class="details-section__title">"Itens"</h5>
                    <OrderItems state=state />
                </div>
            }.into_any()
        }}
    }
}
