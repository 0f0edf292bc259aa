//! Shared corpus for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

pub const FRAUD_MESSAGES: [&str; 20] = [
    "URGENT! You have won a cash prize. Claim now",
    "Winner! Claim your lottery reward today",
    "Your bank account is blocked, verify KYC immediately",
    "Share the OTP to unlock your account",
    "Click this link to claim your free gift card",
    "Congratulations, you won the jackpot. Call to claim",
    "Your debit card is suspended. Verify details at the link",
    "Final notice: pay penalty or face court action",
    "Reward points expire today, redeem cash now",
    "Verify your netbanking login to avoid suspension",
    "You are selected for a cash reward, click the link",
    "Lottery winner: send your bank details to claim",
    "Account locked. Reset password using this link",
    "Claim your prize before it expires tonight",
    "Exclusive offer: recharge now and win cash",
    "Income tax refund pending, verify your account",
    "Your SIM will be blocked, update KYC via link",
    "Free lottery tickets, click to claim reward",
    "Security alert: confirm your card PIN now",
    "Jackpot prize waiting, send OTP to claim cash",
];

pub const SAFE_MESSAGES: [&str; 20] = [
    "Are we still on for lunch tomorrow?",
    "Mom says dinner is at eight",
    "The meeting moved to 3pm",
    "Thanks for the birthday wishes!",
    "Can you pick up milk on the way home?",
    "See you at the movie tonight",
    "Running late, stuck in traffic",
    "Happy anniversary, love you",
    "Class is cancelled this afternoon",
    "Let me know when you reach home",
    "Great game last night, well played",
    "Office party is on Friday evening",
    "Did you finish the homework for class?",
    "Grandma is visiting this weekend",
    "Lunch with the team at noon",
    "The kids loved the picnic",
    "Please water the plants while I travel",
    "Coffee after the meeting?",
    "Weekend trip photos look amazing",
    "Dinner reservation confirmed for two",
];

/// Fixture directory holding a labeled CSV.
pub struct Fixture {
    pub dir: TempDir,
    pub dataset: PathBuf,
}

impl Fixture {
    pub fn model_path(&self) -> PathBuf {
        self.dir.path().join("model.json")
    }
}

/// Write the corpus (plus two rows cleaning must drop) as `dataset.csv`.
pub fn write_dataset() -> Fixture {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("dataset.csv");

    let mut writer = csv::Writer::from_path(&dataset).unwrap();
    writer.write_record(["target", "text"]).unwrap();
    for (fraud, safe) in FRAUD_MESSAGES.iter().zip(SAFE_MESSAGES.iter()) {
        writer.write_record(["spam", *fraud]).unwrap();
        writer.write_record(["ham", *safe]).unwrap();
    }
    writer.write_record(["unknown", "label cannot be parsed"]).unwrap();
    writer.write_record(["ham", "  "]).unwrap();
    writer.flush().unwrap();

    Fixture { dir, dataset }
}
