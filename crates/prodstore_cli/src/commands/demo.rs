//! Demo command implementation.

use prodstore_core::{Context, ProductStore, ProductUpdate, StoreError};
use serde::Serialize;
use serde_json::{json, Value};

/// One step of the walkthrough.
#[derive(Debug, Serialize)]
pub struct DemoStep {
    /// Operation performed.
    pub operation: String,
    /// Returned value, if the call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error message, if the call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DemoStep {
    fn record<T: Serialize>(operation: String, outcome: Result<T, StoreError>) -> Self {
        match outcome {
            Ok(value) => Self {
                operation,
                result: Some(json!(value)),
                error: None,
            },
            Err(err) => Self {
                operation,
                result: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Runs the walkthrough and prints every step.
///
/// Add a product, rename it, reprice it, delete it, then show that reads
/// and repeated deletes report absence.
pub fn run(store: &dyn ProductStore, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let steps = walkthrough(store, &Context::background())?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&steps)?),
        _ => {
            for step in &steps {
                match (&step.result, &step.error) {
                    (Some(value), _) => println!("{:<28} -> {}", step.operation, value),
                    (None, Some(err)) => println!("{:<28} !! {}", step.operation, err),
                    (None, None) => println!("{}", step.operation),
                }
            }
        }
    }
    Ok(())
}

fn walkthrough(store: &dyn ProductStore, ctx: &Context) -> Result<Vec<DemoStep>, StoreError> {
    let id = store.add(ctx)?;
    let short = &id[..id.len().min(8)];

    let mut steps = vec![DemoStep::record("add".into(), Ok::<_, StoreError>(&id))];
    steps.push(DemoStep::record(format!("get {short}"), store.get(ctx, &id)));

    let rename = ProductUpdate::new(&id).with_name("Widget");
    steps.push(DemoStep::record(
        format!("update {short} name=Widget"),
        store.update(ctx, &rename),
    ));
    steps.push(DemoStep::record(format!("get {short}"), store.get(ctx, &id)));

    let reprice = ProductUpdate::new(&id).with_price(9.99);
    steps.push(DemoStep::record(
        format!("update {short} price=9.99"),
        store.update(ctx, &reprice),
    ));
    steps.push(DemoStep::record(format!("get {short}"), store.get(ctx, &id)));

    steps.push(DemoStep::record(
        format!("update {short}"),
        store.update(ctx, &ProductUpdate::new(&id)),
    ));
    steps.push(DemoStep::record(format!("delete {short}"), store.delete(ctx, &id)));
    steps.push(DemoStep::record(format!("get {short}"), store.get(ctx, &id)));
    steps.push(DemoStep::record(format!("delete {short}"), store.delete(ctx, &id)));
    steps.push(DemoStep::record("list".into(), store.get_all(ctx)));

    Ok(steps)
}
