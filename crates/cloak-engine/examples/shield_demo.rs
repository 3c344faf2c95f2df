//! End-to-end demo: shield an object and watch private members disappear.
//!
//! Run with: `cargo run --example shield_demo`

use cloak_engine::{protect, Engine, ObjectRef, Value};

fn main() {
    let mut engine = Engine::new();

    let target = ObjectRef::new();
    target.define("_secret", Value::int(2006));
    target.define(
        "reveal",
        Value::native("reveal", |engine, this, _args| {
            let this = this.as_object().cloned().expect("method called on an object");
            let secret = engine.get(&this, "_secret").as_int().unwrap_or(0);
            Ok(Value::int(secret + 10))
        }),
    );

    println!("before: keys = {:?}", target.keys());

    protect(&Value::object(target.clone()));

    println!("after:  keys = {:?}", target.keys());
    println!("outside read of _secret: {}", engine.get(&target, "_secret"));

    let revealed = engine
        .call_method(&target, "reveal", &[])
        .expect("reveal is public and callable");
    println!("reveal() = {revealed}");

    // Calling a private member from out here fails like any call on undefined
    match engine.call_method(&target, "_secret", &[]) {
        Ok(_) => unreachable!(),
        Err(err) => println!("calling _secret from outside: {err}"),
    }
}
