use super::state::DashboardState;
use super::view_model::OrderRowVm;
use crate::shared::components::pagination_controls::PaginationControls;
use chrono::Local;
use leptos::prelude::*;
use thaw::*;

/// Таблица заказов текущей страницы.
///
/// Сортировка и фильтры отключены: порядок строк задаёт сервер.
#[component]
pub fn OrderList(
    state: RwSignal<DashboardState>,
    /// Новый номер страницы (0-indexed)
    on_page_change: Callback<usize>,
    /// `id` заказа, по строке которого кликнули
    on_select: Callback<i64>,
) -> impl IntoView {
    let rows = Memo::new(move |_| {
        state.with(|s| {
            s.orders
                .iter()
                .map(|o| OrderRowVm::from_order(o, &Local))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="orders-list">
            <div class="orders-list__toolbar">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || {
                        state.with(|s| usize::try_from(s.total_count).unwrap_or(usize::MAX))
                    })
                    on_page_change=on_page_change
                />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=100.0>"N° Pedido"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Data do Pedido"</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>"Data de Entrega"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Valor Total"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let data = rows.get();
                            if data.is_empty() {
                                let message = if state.with(|s| s.is_loading) {
                                    "Carregando..."
                                } else {
                                    "Nenhum pedido encontrado"
                                };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="4">
                                            <TableCellLayout>{message}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }

                            data.into_iter().map(|row| {
                                let id = row.id;
                                let is_selected = move || state.with(|s| s.selected == Some(id));
                                let delivered = row.delivery_date.is_some();
                                let delivery = row.delivery_label().to_string();
                                let total = row.total();

                                view! {
                                    <TableRow
                                        class:table__row--selected=is_selected
                                        on:click=move |_| on_select.run(id)
                                        attr:style="cursor: pointer;"
                                    >
                                        <TableCell>
                                            <TableCellLayout>{row.number.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{row.creation_date.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class:text-very-light={!delivered}>{delivery}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell class="text-right">
                                            <span>{total}</span>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
