//! Компонент ячейки таблицы для денежных значений
//!
//! ```ignore
//! <TableCellMoney value=Some(item.line_total) />
//! ```

use super::number_format::format_brl;
use leptos::prelude::*;
use thaw::*;

/// Ячейка таблицы с денежным значением
///
/// Форматирует число как сумму в реалах (`R$ 1.234,50`) и выравнивает по правому краю.
/// Отсутствующее значение показывается прочерком.
#[component]
pub fn TableCellMoney(
    /// Значение для отображения
    #[prop(into)]
    value: Signal<Option<f64>>,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_brl(v),
        None => "—".to_string(),
    };

    view! {
        <TableCell class="text-right">
            <span>{formatted_text}</span>
        </TableCell>
    }
}
