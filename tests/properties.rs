use rand::prng::XorShiftRng;
use rand::{Rng, SeedableRng};
use rexpr::gp::expr::{self, BinaryOp, Expr, UnaryFn};

const SEEDS: u8 = 32;
const MAX_HEIGHT: u32 = 6;
const INPUTS: &[f64] = &[-3.5, -1.0, 0.0, 0.5, 2.0, 4.0, 10.0];

fn rng(seed: u8) -> XorShiftRng {
    XorShiftRng::from_seed([seed.wrapping_mul(7).wrapping_add(1); 16])
}

// Equal values, or both NaN.
fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// Every leaf's distance from the root.
fn leaf_depths(expr: &Expr, depth: u32, depths: &mut Vec<u32>) {
    match *expr {
        Expr::Const(_) | Expr::Var => depths.push(depth),
        _ => {
            for input in expr.inputs() {
                leaf_depths(input, depth + 1, depths);
            }
        }
    }
}

// Wrap a random generated tree in unary functions so that clone is also exercised on them.
fn wrap_unary<R: Rng>(rng: &mut R, expr: Expr) -> Expr {
    let func = UnaryFn::ALL[rng.gen_range(0, UnaryFn::ALL.len())];
    Expr::binary(BinaryOp::Sub, Expr::unary(func, expr), Expr::unary(UnaryFn::Neg, Expr::var()))
}

#[test]
fn generated_leaves_are_all_at_the_given_height() {
    for seed in 0..SEEDS {
        let mut rng = rng(seed);
        for height in 0..=MAX_HEIGHT {
            let expr = expr::generate(&mut rng, height);
            let mut depths = vec![];
            leaf_depths(&expr, 0, &mut depths);
            assert_eq!(depths.len(), 1 << height);
            assert!(depths.iter().all(|&d| d == height));
        }
    }
}

#[test]
fn clone_preserves_evaluation() {
    for seed in 0..SEEDS {
        let mut rng = rng(seed);
        let generated = expr::generate(&mut rng, 4);
        let original = wrap_unary(&mut rng, generated);
        let copy = original.clone();
        for &x in INPUTS {
            assert!(same(copy.evaluate(x), original.evaluate(x)), "{} at x = {}", original, x);
        }
    }
}

#[test]
fn clone_preserves_rendering() {
    for seed in 0..SEEDS {
        let mut rng = rng(seed);
        let generated = expr::generate(&mut rng, 5);
        let original = wrap_unary(&mut rng, generated);
        assert_eq!(original.clone().render(), original.render());
    }
}

#[test]
fn clone_is_independent_of_the_original() {
    let original = expr::generate(&mut rng(0), 3);
    let rendered = original.render();
    let mut copy = original.clone();
    if let Expr::Binary(_, ref mut l, _) = copy {
        **l = Expr::constant(100.0);
    }
    assert_eq!(original.render(), rendered);
    assert_ne!(copy.render(), rendered);
}

#[test]
fn evaluate_always_returns_a_value() {
    for seed in 0..SEEDS {
        let mut rng = rng(seed);
        for height in 0..=MAX_HEIGHT {
            let expr = expr::generate(&mut rng, height);
            for &x in INPUTS {
                // Any f64 is acceptable, including NaN and infinities.
                let _ = expr.evaluate(x);
            }
        }
    }
}

#[test]
fn binary_inputs_are_parenthesized_at_every_level() {
    for seed in 0..SEEDS {
        let expr = expr::generate(&mut rng(seed), 3);
        let rendered = expr.render();
        // A full tree of height 3 wraps both height 2 inputs, each of which wraps its own inputs.
        assert!(rendered.starts_with("(("), "{}", rendered);
        assert!(rendered.ends_with("))"), "{}", rendered);
        assert_eq!(rendered.matches('(').count(), 6, "{}", rendered);
        assert_eq!(rendered.matches(')').count(), 6, "{}", rendered);
    }
}

#[test]
fn terminal_and_unary_inputs_are_never_parenthesized() {
    let leaves = vec![
        Expr::constant(-1.25),
        Expr::var(),
        Expr::unary(UnaryFn::Exp, Expr::var()),
        Expr::unary(UnaryFn::Neg, Expr::constant(2.0)),
    ];
    for &op in BinaryOp::ALL.iter() {
        for l in &leaves {
            for r in &leaves {
                let expr = Expr::binary(op, l.clone(), r.clone());
                assert_eq!(expr.render(), format!("{} {} {}", l, op.symbol(), r));
            }
        }
    }
}

#[test]
fn scenario_sum_and_product() {
    let sum = Expr::binary(
        BinaryOp::Add,
        Expr::constant(2.0),
        Expr::binary(BinaryOp::Mul, Expr::var(), Expr::constant(3.0)),
    );
    assert_eq!(sum.evaluate(4.0), 14.0);
    assert_eq!(sum.render(), "2.00 + (x * 3.00)");

    let product = Expr::binary(
        BinaryOp::Mul,
        Expr::binary(BinaryOp::Add, Expr::constant(1.0), Expr::var()),
        Expr::constant(3.0),
    );
    assert_eq!(product.render(), "(1.00 + x) * 3.00");
    assert_eq!(product.evaluate(1.0), 6.0);
}

#[test]
fn scenario_negation() {
    let neg = Expr::unary(UnaryFn::Neg, Expr::constant(5.0));
    assert_eq!(neg.render(), "-5.00");
    for &x in INPUTS {
        assert_eq!(neg.evaluate(x), -5.0);
    }
}

#[test]
fn scenario_height_zero() {
    for seed in 0..SEEDS {
        match expr::generate(&mut rng(seed), 0) {
            Expr::Const(value) => assert!(value >= -5.0 && value < 5.0),
            Expr::Var => (),
            other => panic!("unexpected node {:?}", other),
        }
    }
}
