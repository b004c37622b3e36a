//! Checkout demo showing the happy path and the short-circuit path.
//!
//! Run with: cargo run --example demo

use chainer::{pipeline, Outcome, Step};

// ============================================================================
// Carried value
// ============================================================================

/// State threaded through the checkout pipeline.
///
/// Every step receives the state the previous step produced and returns a new
/// one; a failure carries the state as it stood when the call was rejected.
#[derive(Debug, Clone, Default)]
struct CheckoutState {
    order_id: Option<String>,
    payment_id: Option<String>,
    receipt_sent: bool,
    rejection: Option<String>,
}

// ============================================================================
// Step implementations (simulated service calls)
// ============================================================================

/// Step 1: Create the order record.
#[derive(Debug, Clone)]
struct CreateOrder {
    customer: String,
}

impl Step<CheckoutState> for CreateOrder {
    fn run(&mut self, prev: Option<&CheckoutState>) -> Outcome<CheckoutState> {
        let mut state = prev.cloned().unwrap_or_default();
        state.order_id = Some(format!("ORD-{}", self.customer));
        println!("  [CreateOrder] Order created: {:?}", state.order_id);
        Outcome::Success(state)
    }
}

/// Step 2: Charge the card.
#[derive(Debug, Clone)]
struct ChargeCard {
    amount_cents: u32,
    decline: bool,
}

impl Step<CheckoutState> for ChargeCard {
    fn run(&mut self, prev: Option<&CheckoutState>) -> Outcome<CheckoutState> {
        let mut state = prev.cloned().unwrap_or_default();
        println!(
            "  [ChargeCard] Charging {}.{:02}...",
            self.amount_cents / 100,
            self.amount_cents % 100
        );

        if self.decline {
            println!("  [ChargeCard] DECLINED");
            state.rejection = Some("card declined".to_string());
            return Outcome::Failure(state);
        }

        state.payment_id = Some(format!("PAY-{}", self.amount_cents));
        println!("  [ChargeCard] Payment accepted: {:?}", state.payment_id);
        Outcome::Success(state)
    }
}

/// Step 3: Send the receipt.
#[derive(Debug, Clone)]
struct SendReceipt {
    email: String,
}

impl Step<CheckoutState> for SendReceipt {
    fn run(&mut self, prev: Option<&CheckoutState>) -> Outcome<CheckoutState> {
        let mut state = prev.cloned().unwrap_or_default();
        println!("  [SendReceipt] Receipt sent to {}", self.email);
        state.receipt_sent = true;
        Outcome::Success(state)
    }
}

// Steps can also be plain closures; named types are only needed when a step
// carries configuration, so the pipeline below uses named types throughout.

pipeline! {
    Checkout<CheckoutState> {
        create_order: CreateOrder,
        charge_card: ChargeCard,
        send_receipt: SendReceipt,
    }
}

// ============================================================================
// Demo scenarios
// ============================================================================

fn main() {
    run_happy_path();
    run_declined_card();
}

fn run_happy_path() {
    println!("Scenario 1: Happy path - all steps succeed\n");

    let chain = Checkout::new(CheckoutSteps {
        create_order: CreateOrder {
            customer: "CUST-123".to_string(),
        },
        charge_card: ChargeCard {
            amount_cents: 9999,
            decline: false,
        },
        send_receipt: SendReceipt {
            email: "customer@example.com".to_string(),
        },
    })
    .run();

    match chain.into_result() {
        Some(Outcome::Success(state)) => {
            println!("\n  Checkout completed: {:?}\n", state);
        }
        Some(Outcome::Failure(state)) => {
            println!("\n  Checkout rejected: {:?}\n", state.rejection);
        }
        None => unreachable!("the pipeline ran at least one step"),
    }
}

fn run_declined_card() {
    println!("Scenario 2: Declined card - receipt step is skipped\n");

    let chain = Checkout::new(CheckoutSteps {
        create_order: CreateOrder {
            customer: "CUST-456".to_string(),
        },
        charge_card: ChargeCard {
            amount_cents: 99999,
            decline: true,
        },
        send_receipt: SendReceipt {
            email: "customer@example.com".to_string(),
        },
    })
    .run();

    match chain.into_result() {
        Some(Outcome::Failure(state)) => {
            println!("\n  Checkout rejected: {:?}", state.rejection);
            println!("  Receipt sent: {}\n", state.receipt_sent);
        }
        other => {
            println!("\n  Unexpected outcome: {:?}\n", other);
        }
    }
}
