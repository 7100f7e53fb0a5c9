use std::fmt;

/// Table roles for one hand. `None` covers seats with no blind obligation,
/// including busted seats sitting the hand out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Role {
    #[default]
    None,
    Dealer,
    SmallBlind,
    BigBlind,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::None => "",
            Role::Dealer => "BTN",
            Role::SmallBlind => "SB",
            Role::BigBlind => "BB",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which seats hold the button and the blinds for one hand.
///
/// With exactly two funded seats there is no dealer and the two blinds swap
/// every hand; with three or more there is exactly one of each role.
///
/// ```
/// use holdem_engine::roles::RoleAssignment;
///
/// let roles = RoleAssignment::assign_initial(&[true, true, true]).unwrap();
/// assert_eq!(roles.dealer, Some(0));
/// assert_eq!((roles.small_blind, roles.big_blind), (1, 2));
///
/// let next = roles.rotate(&[true, true, true]).unwrap();
/// assert_eq!(next.big_blind, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    pub dealer: Option<usize>,
    pub small_blind: usize,
    pub big_blind: usize,
}

impl RoleAssignment {
    /// Roles for the first hand: the first funded seats in table order take
    /// Dealer, SmallBlind, BigBlind. `None` with fewer than two funded seats.
    pub fn assign_initial(funded: &[bool]) -> Option<Self> {
        let mut seats = funded.iter().enumerate().filter(|(_, &f)| f).map(|(i, _)| i);
        if funded.iter().filter(|&&f| f).count() == 2 {
            let small_blind = seats.next()?;
            let big_blind = seats.next()?;
            return Some(Self { dealer: None, small_blind, big_blind });
        }
        let dealer = seats.next()?;
        let small_blind = seats.next()?;
        let big_blind = seats.next()?;
        Some(Self { dealer: Some(dealer), small_blind, big_blind })
    }

    /// Advance roles by one seat for the next hand: the big blind moves to
    /// the next funded seat and the small blind and dealer walk back from
    /// it. Busted seats are skipped. `None` with fewer than two funded seats.
    pub fn rotate(&self, funded: &[bool]) -> Option<Self> {
        let count = funded.iter().filter(|&&f| f).count();
        if count < 2 {
            return None;
        }
        let big_blind = next_funded(funded, self.big_blind)?;
        if count == 2 {
            let small_blind = next_funded(funded, big_blind)?;
            return Some(Self { dealer: None, small_blind, big_blind });
        }
        let small_blind = prev_funded(funded, big_blind)?;
        let dealer = prev_funded(funded, small_blind)?;
        Some(Self { dealer: Some(dealer), small_blind, big_blind })
    }
}

fn next_funded(funded: &[bool], from: usize) -> Option<usize> {
    let n = funded.len();
    (1..=n).map(|step| (from + step) % n).find(|&i| funded[i])
}

fn prev_funded(funded: &[bool], from: usize) -> Option<usize> {
    let n = funded.len();
    (1..=n).map(|step| (from + n - step) % n).find(|&i| funded[i])
}
