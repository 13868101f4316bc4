pub mod by_category;
pub mod by_person;

const LOAD_FAILURE: &str = "Erro ao carregar totais. Tente novamente.";
const NO_DATA: &str = "Nenhum dado disponível.";

/// Styling for a balance cell
pub(crate) fn balance_class(balance: f64) -> &'static str {
    if balance < 0.0 {
        "saldo-negativo"
    } else {
        "saldo-positivo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_class() {
        assert_eq!(balance_class(10.0), "saldo-positivo");
        assert_eq!(balance_class(0.0), "saldo-positivo");
        assert_eq!(balance_class(-0.01), "saldo-negativo");
    }
}
