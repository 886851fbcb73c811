use crate::domain::a001_order::ui::OrdersDashboard;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let (config, set_config) = signal(None::<AppConfig>);

    // config.toml is fetched once; the dashboard starts after it resolves
    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = load_config().await;
            log::set_max_level(loaded.log.level_filter());
            set_config.set(Some(loaded));
        });
    });

    view! {
        <ConfigProvider>
            {move || match config.get() {
                Some(cfg) => view! { <OrdersDashboard config=cfg /> }.into_any(),
                None => view! { <div class="page page--loading">"Carregando..."</div> }.into_any(),
            }}
        </ConfigProvider>
    }
}
