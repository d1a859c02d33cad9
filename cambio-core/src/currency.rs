//! Currency table
//!
//! Every piece of per-currency metadata (symbol, name, minor-unit scale,
//! rate to the base currency) lives in one table indexed by [`Currency`].
//! Display and conversion code both read from it.

/// Supported currencies, in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Currency {
    /// Brazilian real, the base currency all conversions route through
    Brl = 0,
    /// US dollar
    Usd = 1,
    /// Euro
    Eur = 2,
    /// Bitcoin, counted in whole units only
    Btc = 3,
    /// Japanese yen
    Jpy = 4,
}

/// Static metadata for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Three-letter display symbol
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Minor units per whole unit (100 = two fractional digits, 1 = none)
    pub scale: u16,
    /// `to_base = amount * to_base_num / to_base_den`
    pub to_base_num: i64,
    /// Nonzero denominator of the base rate
    pub to_base_den: i64,
}

/// Number of supported currencies
pub const CURRENCY_COUNT: usize = 5;

/// Rate table, indexed by `Currency as usize`
pub static CURRENCIES: [CurrencyInfo; CURRENCY_COUNT] = [
    CurrencyInfo {
        symbol: "BRL",
        name: "Real",
        scale: 100,
        to_base_num: 1,
        to_base_den: 1,
    },
    CurrencyInfo {
        symbol: "USD",
        name: "Dollar",
        scale: 100,
        to_base_num: 500,
        to_base_den: 100,
    },
    CurrencyInfo {
        symbol: "EUR",
        name: "Euro",
        scale: 100,
        to_base_num: 555,
        to_base_den: 100,
    },
    CurrencyInfo {
        symbol: "BTC",
        name: "Bitcoin",
        scale: 1,
        to_base_num: 20000,
        to_base_den: 1,
    },
    CurrencyInfo {
        symbol: "JPY",
        name: "Yen",
        scale: 100,
        to_base_num: 100,
        to_base_den: 3000,
    },
];

impl Currency {
    /// All currencies in selection order
    pub const ALL: [Currency; CURRENCY_COUNT] = [
        Currency::Brl,
        Currency::Usd,
        Currency::Eur,
        Currency::Btc,
        Currency::Jpy,
    ];

    /// First currency in selection order
    pub const FIRST: Currency = Currency::Brl;

    /// Last currency in selection order
    pub const LAST: Currency = Currency::Jpy;

    /// The pivot currency
    pub const BASE: Currency = Currency::Brl;

    /// Table entry for this currency
    pub fn info(self) -> &'static CurrencyInfo {
        &CURRENCIES[self as usize]
    }

    /// Three-letter display symbol
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// True when the currency has no fractional digits
    pub fn is_whole_units(self) -> bool {
        self.info().scale == 1
    }

    /// Position in selection order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Currency at a position in selection order
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next currency, clamped at [`Currency::LAST`]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Previous currency, clamped at [`Currency::FIRST`]
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::FIRST)
    }

    /// Replacement target when the source equals `self`
    ///
    /// The base currency bumps to the dollar; everything else bumps to
    /// the base currency.
    pub const fn alternate(self) -> Self {
        match self {
            Currency::Brl => Currency::Usd,
            _ => Self::BASE,
        }
    }
}
