use quotaring::{LockedQueue, Ring};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("unexpected outcome: {0}")]
    UnexpectedOutcome(String),
}

/// Walk a two-slot ring through fill, reject, pop and refill, printing each
/// step and failing if any outcome differs from the expected one.
pub fn run_scenario() -> Result<(), ScenarioError> {
    let ring = Ring::<_, LockedQueue<_>>::with_capacity(2);
    println!("Scenario: ring with capacity {}", ring.capacity());

    for (item, expect_ok) in [('a', true), ('b', true), ('c', false)] {
        let ok = ring.push(item).is_ok();
        println!(
            "  push {:?} -> {}  (occupancy {})",
            item,
            if ok { "ok" } else { "ring full" },
            ring.occupancy()
        );
        expect(ok == expect_ok, format!("push {:?} returned ok={}", item, ok))?;
    }

    let popped = ring.pop();
    println!("  pop      -> {:?}  (occupancy {})", popped, ring.occupancy());
    expect(popped == Some('a'), format!("pop returned {:?}", popped))?;
    expect(ring.occupancy() == 1, format!("occupancy {}", ring.occupancy()))?;

    let ok = ring.push('c').is_ok();
    println!(
        "  push 'c' -> {}  (occupancy {})",
        if ok { "ok" } else { "ring full" },
        ring.occupancy()
    );
    expect(ok, "push 'c' after pop was rejected".to_string())?;

    println!("Scenario passed.");
    Ok(())
}

fn expect(ok: bool, what: String) -> Result<(), ScenarioError> {
    if ok {
        Ok(())
    } else {
        Err(ScenarioError::UnexpectedOutcome(what))
    }
}
