use std::str::FromStr;

use crate::Error;

/// One of the six entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    Transfer,
    DisplayAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "1" => Ok(MenuChoice::CreateAccount),
            "2" => Ok(MenuChoice::Deposit),
            "3" => Ok(MenuChoice::Withdraw),
            "4" => Ok(MenuChoice::Transfer),
            "5" => Ok(MenuChoice::DisplayAll),
            "6" => Ok(MenuChoice::Exit),
            _ => Err(Error::InvalidMenuChoice),
        }
    }
}

/// Kind of a bank account. Only changes the display label; there is no
/// behavioral difference between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Checking,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Checking => "Checking",
        }
    }
}

impl FromStr for AccountKind {
    type Err = Error;

    /// Parses the interactive type selector (1 = Savings, 2 = Checking).
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "1" => Ok(AccountKind::Savings),
            "2" => Ok(AccountKind::Checking),
            _ => Err(Error::InvalidAccountType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_menu_choices() {
        assert_eq!("1".parse(), Ok(MenuChoice::CreateAccount));
        assert_eq!("2".parse(), Ok(MenuChoice::Deposit));
        assert_eq!("3".parse(), Ok(MenuChoice::Withdraw));
        assert_eq!("4".parse(), Ok(MenuChoice::Transfer));
        assert_eq!("5".parse(), Ok(MenuChoice::DisplayAll));
        assert_eq!("6".parse(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_menu_choice_out_of_range() {
        assert_eq!("0".parse::<MenuChoice>(), Err(Error::InvalidMenuChoice));
        assert_eq!("7".parse::<MenuChoice>(), Err(Error::InvalidMenuChoice));
    }

    #[test]
    fn test_parse_menu_choice_not_a_number() {
        assert_eq!("abc".parse::<MenuChoice>(), Err(Error::InvalidMenuChoice));
        assert_eq!("".parse::<MenuChoice>(), Err(Error::InvalidMenuChoice));
        assert_eq!("1.5".parse::<MenuChoice>(), Err(Error::InvalidMenuChoice));
    }

    #[test]
    fn test_parse_account_kind() {
        assert_eq!("1".parse(), Ok(AccountKind::Savings));
        assert_eq!("2".parse(), Ok(AccountKind::Checking));
    }

    #[test]
    fn test_parse_invalid_account_kind() {
        assert_eq!("3".parse::<AccountKind>(), Err(Error::InvalidAccountType));
        assert_eq!("savings".parse::<AccountKind>(), Err(Error::InvalidAccountType));
        assert_eq!("".parse::<AccountKind>(), Err(Error::InvalidAccountType));
    }

    #[test]
    fn test_account_kind_labels() {
        assert_eq!(AccountKind::Savings.as_str(), "Savings");
        assert_eq!(AccountKind::Checking.as_str(), "Checking");
    }
}
