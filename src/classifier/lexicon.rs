//! Keyword heuristic overlay.
//!
//! A fixed lexicon of risk terms scanned by plain substring containment on
//! the lowercased message. The scan only explains a verdict; it never feeds
//! the probabilistic model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme of a risk term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    Urgency,
    Financial,
    Phishing,
    LegalThreat,
    SubscriptionScam,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Urgency => "urgency",
            RiskCategory::Financial => "financial",
            RiskCategory::Phishing => "phishing",
            RiskCategory::LegalThreat => "legal-threat",
            RiskCategory::SubscriptionScam => "subscription-scam",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskTerm {
    pub term: &'static str,
    pub category: RiskCategory,
}

const fn term(term: &'static str, category: RiskCategory) -> RiskTerm {
    RiskTerm { term, category }
}

use RiskCategory::{Financial, LegalThreat, Phishing, SubscriptionScam, Urgency};

/// The built-in lexicon, in scan order.
pub static RISK_LEXICON: &[RiskTerm] = &[
    term("urgent", Urgency),
    term("immediately", Urgency),
    term("now", Urgency),
    term("limited", Urgency),
    term("hurry", Urgency),
    term("final", Urgency),
    term("alert", Urgency),
    term("warning", Urgency),
    term("important", Urgency),
    term("act", Urgency),
    term("today", Urgency),
    term("expire", Urgency),
    term("expired", Urgency),
    term("suspend", Urgency),
    term("suspended", Urgency),
    term("blocked", Urgency),
    term("deactivated", Urgency),
    term("locked", Urgency),
    term("win", Financial),
    term("winner", Financial),
    term("won", Financial),
    term("prize", Financial),
    term("lottery", Financial),
    term("reward", Financial),
    term("cash", Financial),
    term("bonus", Financial),
    term("gift", Financial),
    term("free", Financial),
    term("congratulations", Financial),
    term("jackpot", Financial),
    term("claim", Financial),
    term("bank", Financial),
    term("account", Financial),
    term("atm", Financial),
    term("card", Financial),
    term("credit", Financial),
    term("debit", Financial),
    term("transaction", Financial),
    term("payment", Financial),
    term("refund", Financial),
    term("withdraw", Financial),
    term("deposit", Financial),
    term("balance", Financial),
    term("upi", Financial),
    term("netbanking", Financial),
    term("kyc", Financial),
    term("pan", Financial),
    term("aadhaar", Financial),
    term("otp", Phishing),
    term("verify", Phishing),
    term("verification", Phishing),
    term("code", Phishing),
    term("pin", Phishing),
    term("secure", Phishing),
    term("security", Phishing),
    term("update", Phishing),
    term("confirm", Phishing),
    term("validate", Phishing),
    term("click", Phishing),
    term("link", Phishing),
    term("http", Phishing),
    term("www", Phishing),
    term("login", Phishing),
    term("signin", Phishing),
    term("reset", Phishing),
    term("password", Phishing),
    term("details", Phishing),
    term("credentials", Phishing),
    term("legal", LegalThreat),
    term("notice", LegalThreat),
    term("court", LegalThreat),
    term("penalty", LegalThreat),
    term("fine", LegalThreat),
    term("complaint", LegalThreat),
    term("fraud", LegalThreat),
    term("illegal", LegalThreat),
    term("tax", LegalThreat),
    term("income", LegalThreat),
    term("subscription", SubscriptionScam),
    term("renew", SubscriptionScam),
    term("recharge", SubscriptionScam),
    term("sim", SubscriptionScam),
    term("mobile", SubscriptionScam),
    term("offer", SubscriptionScam),
    term("discount", SubscriptionScam),
    term("limited offer", SubscriptionScam),
    term("deal", SubscriptionScam),
];

/// Substring scanner over a term table.
#[derive(Debug, Clone, Copy)]
pub struct RiskLexicon {
    terms: &'static [RiskTerm],
}

impl Default for RiskLexicon {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskLexicon {
    /// The built-in lexicon.
    pub fn standard() -> Self {
        Self::new(RISK_LEXICON)
    }

    /// Scanner over a custom static table. Terms are expected lowercase.
    pub fn new(terms: &'static [RiskTerm]) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &'static [RiskTerm] {
        self.terms
    }

    /// Terms contained in `text`, in lexicon order.
    ///
    /// ```
    /// use smsguard::classifier::RiskLexicon;
    ///
    /// let words = RiskLexicon::standard().scan("Your OTP expires today");
    /// assert_eq!(words, vec!["today", "expire", "otp"]);
    /// ```
    pub fn scan(&self, text: &str) -> Vec<String> {
        self.matches(text).map(|t| t.term.to_string()).collect()
    }

    /// Like [`scan`](Self::scan) but keeps each term's category.
    pub fn scan_categorized(&self, text: &str) -> Vec<RiskTerm> {
        self.matches(text).copied().collect()
    }

    fn matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a RiskTerm> + 'a {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .filter(move |entry| lowered.contains(entry.term))
    }
}

/// Scan `text` with the built-in lexicon.
pub fn scan(text: &str) -> Vec<String> {
    RiskLexicon::standard().scan(text)
}
