/// Running totals of money moved through the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EconomyStats {
    pub total_earned: u64,
    pub total_spent: u64,
    pub total_transactions: u64,
}

impl EconomyStats {
    pub fn record_sale(&mut self, price: u32) {
        self.total_earned = self.total_earned.saturating_add(price as u64);
        self.total_transactions += 1;
    }

    pub fn record_purchase(&mut self, price: u32) {
        self.total_spent = self.total_spent.saturating_add(price as u64);
        self.total_transactions += 1;
    }
}

/// Format a money amount for the info bar (e.g. "$1,234").
pub fn format_money(amount: u32) -> String {
    let digits: Vec<char> = amount.to_string().chars().collect();
    let mut result = String::from("$");
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}
