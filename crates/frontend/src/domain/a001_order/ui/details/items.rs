use super::super::state::{items_page, DashboardState};
use super::super::view_model::ItemRowVm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::TableCellMoney;
use leptos::prelude::*;
use thaw::*;

/// Позиции выбранного заказа, по 20 на страницу
#[component]
pub fn OrderItems(state: RwSignal<DashboardState>) -> impl IntoView {
    let rows = Memo::new(move |_| {
        state.with(|s| match s.selected_order() {
            Some(order) => items_page(&order.products, s.item_page)
                .iter()
                .map(ItemRowVm::from)
                .collect::<Vec<_>>(),
            None => Vec::new(),
        })
    });

    let item_count = Signal::derive(move || {
        state.with(|s| s.selected_order().map(|o| o.products.len()).unwrap_or(0))
    });

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=300.0>"Nome"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Quantidade"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Preço Unitário"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Preço Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        rows.get().into_iter().map(|item| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{item.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.quantity}</TableCellLayout>
                                    </TableCell>
                                    <TableCellMoney value=Some(item.unit_price) />
                                    <TableCellMoney value=Some(item.line_total) />
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
        </div>

        <Show when=move || { state.with(|s| s.item_pages() > 1) }>
            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.item_page))
                total_pages=Signal::derive(move || state.with(|s| s.item_pages()))
                total_count=item_count
                on_page_change=Callback::new(move |page: usize| {
                    state.update(|s| s.set_item_page(page));
                })
            />
        </Show>
    }
}
