use super::details::OrderDetails;
use super::list::OrderList;
use super::state::DashboardState;
use crate::domain::a001_order::api;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Дашборд заказов: таблица страницы слева, детали выбранного заказа справа
#[component]
pub fn OrdersDashboard(config: AppConfig) -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let api_config = StoredValue::new(config.api);

    // Загрузка страницы; ответ устаревшего запроса отбрасывается
    let load_page = move |page: usize| {
        let Some(request) = state.try_update(|s| s.begin_page_load(page)) else {
            return;
        };
        let api_config = api_config.get_value();

        spawn_local(async move {
            log::debug!("Loading orders page {} (request #{})", request.page, request.seq);
            let result = api::get_page(&api_config, request.page_index()).await;

            match result {
                Ok(response) => {
                    let count = response.orders.len();
                    let applied = state
                        .try_update(|s| s.apply_page(request, response))
                        .unwrap_or(false);
                    if applied {
                        log::debug!("Orders page {} loaded: {} rows", request.page, count);
                    } else {
                        log::debug!("Dropped stale response for page {}", request.page);
                    }
                }
                Err(e) => {
                    log::error!("Failed to load orders page {}: {}", request.page, e);
                    state.try_update(|s| s.fail_page(request, e.to_string()));
                }
            }
        });
    };

    // Initial load
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.is_loading) {
            load_page(0);
        }
    });

    let reload = move || load_page(state.with_untracked(|s| s.page));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <PageFrame page_id="a001_order--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| reload()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Carregando..." } else { " Atualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    state.with(|s| s.error.clone()).map(|e| view! {
                        <div class="alert alert--error">
                            {format!("Erro ao carregar pedidos: {}", e)}
                        </div>
                    })
                }}

                <div class="dashboard-grid">
                    <div class="dashboard-grid__col">
                        <h3>"Orders"</h3>
                        <OrderList
                            state=state
                            on_page_change=Callback::new(load_page)
                            on_select=Callback::new(move |id: i64| state.update(|s| s.select(id)))
                        />
                    </div>
                    <div class="dashboard-grid__col">
                        <OrderDetails state=state />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
