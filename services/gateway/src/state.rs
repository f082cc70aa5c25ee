use banking_engine::Bank;

#[derive(Clone)]
pub struct AppState {
    pub bank: Bank,
}

impl AppState {
    pub fn new(bank: Bank) -> Self {
        Self { bank }
    }
}
