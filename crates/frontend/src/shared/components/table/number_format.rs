//! Утилиты форматирования чисел для таблиц
//!
//! Все суммы показываются в формате pt-BR: точка разделяет тысячи,
//! запятая отделяет дробную часть, валюта BRL.

pub const CURRENCY_SYMBOL: &str = "R$";

/// Форматирует число с разделителем тысяч (точка) и запятой перед дробной частью
///
/// # Примеры
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals), value.abs());

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Точка каждые 3 цифры с конца целой части
    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    // -0,00 не показываем
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Форматирует денежное значение с 2 знаками после запятой и разделителем тысяч
///
/// ```ignore
/// assert_eq!(format_money(1234567.89), "1.234.567,89");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма в реалах: `R$ 1.234,50`, для отрицательных `-R$ 5,00`
pub fn format_brl(value: f64) -> String {
    let amount = format_money(value);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{} {}", CURRENCY_SYMBOL, abs),
        None => format!("{} {}", CURRENCY_SYMBOL, amount),
    }
}

/// Форматирует целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}
