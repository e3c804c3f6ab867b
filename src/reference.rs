// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static reference data: the category and country lists. The engine never
//! validates against these; they exist for display and profile setup.

use once_cell::sync::Lazy;

use crate::models::{Category, Country, TxKind};

fn cat(id: &str, name: &str, color: &str, icon: &str, kind: TxKind) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
        kind,
    }
}

pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        cat("food", "Food & Dining", "#EF4444", "🍽️", TxKind::Expense),
        cat("transport", "Transportation", "#3B82F6", "🚗", TxKind::Expense),
        cat("entertainment", "Entertainment", "#8B5CF6", "🎬", TxKind::Expense),
        cat("shopping", "Shopping", "#EC4899", "🛍️", TxKind::Expense),
        cat("utilities", "Utilities", "#F59E0B", "💡", TxKind::Expense),
        cat("healthcare", "Healthcare", "#10B981", "🏥", TxKind::Expense),
        cat("education", "Education", "#06B6D4", "📚", TxKind::Expense),
        cat("other", "Other", "#6B7280", "📦", TxKind::Expense),
        cat("salary", "Salary", "#059669", "💰", TxKind::Income),
        cat("freelance", "Freelance", "#7C3AED", "💻", TxKind::Income),
        cat("investment", "Investment", "#DC2626", "📈", TxKind::Income),
        cat("gift", "Gift", "#DB2777", "🎁", TxKind::Income),
    ]
});

fn country(code: &str, name: &str, currency: &str, symbol: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        currency: currency.to_string(),
        currency_symbol: symbol.to_string(),
    }
}

pub static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    vec![
        country("US", "United States", "USD", "$"),
        country("GB", "United Kingdom", "GBP", "£"),
        country("EU", "European Union", "EUR", "€"),
        country("CA", "Canada", "CAD", "C$"),
        country("AU", "Australia", "AUD", "A$"),
        country("JP", "Japan", "JPY", "¥"),
        country("IN", "India", "INR", "₹"),
        country("CN", "China", "CNY", "¥"),
        country("KR", "South Korea", "KRW", "₩"),
        country("SG", "Singapore", "SGD", "S$"),
        country("CH", "Switzerland", "CHF", "CHF"),
        country("SE", "Sweden", "SEK", "kr"),
        country("BR", "Brazil", "BRL", "R$"),
        country("MX", "Mexico", "MXN", "$"),
        country("ZA", "South Africa", "ZAR", "R"),
        country("TR", "Turkey", "TRY", "₺"),
        country("TH", "Thailand", "THB", "฿"),
        country("VN", "Vietnam", "VND", "₫"),
    ]
});

pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}
