//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify the algebra of condition trees:
//! - AND/OR commutativity and associativity over definite votes
//! - abstention as a two-sided identity
//! - double negation and De Morgan
//! - short-circuiting and boundary narrowing

use crate::algebra;
use crate::builder::{and, not, or};
use crate::leaves::{Leaf, Method};
use crate::permission::{has_object_permission, has_permission};
use crate::policy::Policy;
use crate::test_support::{fixed, tripwire};
use conditions_types::{Caller, RequestSnapshot, TriState};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_tristate() -> impl Strategy<Value = TriState> {
    prop_oneof![
        Just(TriState::Permit),
        Just(TriState::Deny),
        Just(TriState::Abstain),
    ]
}

fn arb_definite() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Permit), Just(TriState::Deny)]
}

fn arb_method() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["GET", "HEAD", "OPTIONS", "POST", "PUT", "PATCH", "DELETE"])
        .prop_map(str::to_string)
}

/// Arbitrary request: method, caller flags, and optional detail/parent parameters.
fn arb_request() -> impl Strategy<Value = RequestSnapshot> {
    (
        arb_method(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of(1i64..5),
        prop::option::of(1i64..5),
        any::<bool>(),
    )
        .prop_map(
            |(method, authenticated, staff, superuser, id, parent, detail)| {
                let mut snapshot = RequestSnapshot::new(method).with_user(Caller {
                    authenticated,
                    staff,
                    superuser,
                    id,
                });
                if let Some(parent) = parent {
                    snapshot = snapshot.with_path_param("parent_lookup_user", &parent.to_string());
                }
                if detail {
                    snapshot = snapshot.with_path_param("pk", "1");
                }
                snapshot
            },
        )
}

/// Builtin leaves; all of them vote definitely.
fn arb_leaf() -> impl Strategy<Value = Policy> {
    prop::sample::select(vec![
        Leaf::AlwaysPermit,
        Leaf::AlwaysDeny,
        Leaf::ObjectOnly,
        Leaf::ReadOnly,
        Leaf::Authenticated,
        Leaf::Staff,
        Leaf::Superuser,
        Leaf::NestedResourceOwner,
        Leaf::MethodEquals(Method::POST),
        Leaf::IsCollectionRequest,
        Leaf::IsListRequest,
        Leaf::IsCreateRequest,
        Leaf::IsRetrieveRequest,
        Leaf::IsUpdateRequest,
        Leaf::IsDestroyRequest,
    ])
    .prop_map(Policy::from)
}

/// Trees over builtin leaves only (never abstain).
fn arb_definite_policy() -> impl Strategy<Value = Policy> {
    arb_leaf().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| or(a, b)),
            inner.prop_map(not),
        ]
    })
}

/// Trees mixing builtin leaves with fixed votes, abstentions included.
fn arb_policy() -> impl Strategy<Value = Policy> {
    let leaf = prop_oneof![arb_leaf(), arb_tristate().prop_map(fixed)];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| or(a, b)),
            inner.prop_map(not),
        ]
    })
}

fn and3(a: TriState, b: TriState) -> TriState {
    algebra::and(a, || b)
}

fn or3(a: TriState, b: TriState) -> TriState {
    algebra::or(a, || b)
}

// ============================================================================
// Operator algebra
// ============================================================================

proptest! {
    #[test]
    fn and_or_commute_over_definite_votes(a in arb_definite(), b in arb_definite()) {
        prop_assert_eq!(and3(a, b), and3(b, a));
        prop_assert_eq!(or3(a, b), or3(b, a));
    }

    #[test]
    fn and_or_associate_over_definite_votes(
        a in arb_definite(),
        b in arb_definite(),
        c in arb_definite(),
    ) {
        prop_assert_eq!(and3(and3(a, b), c), and3(a, and3(b, c)));
        prop_assert_eq!(or3(or3(a, b), c), or3(a, or3(b, c)));
    }

    #[test]
    fn abstain_is_a_two_sided_identity(x in arb_tristate()) {
        prop_assert_eq!(and3(TriState::Abstain, x), x);
        prop_assert_eq!(and3(x, TriState::Abstain), x);
        prop_assert_eq!(or3(TriState::Abstain, x), x);
        prop_assert_eq!(or3(x, TriState::Abstain), x);
    }

    #[test]
    fn double_negation_is_identity(x in arb_tristate()) {
        prop_assert_eq!(algebra::not(algebra::not(x)), x);
    }

    #[test]
    fn de_morgan_over_definite_votes(a in arb_definite(), b in arb_definite()) {
        prop_assert_eq!(
            algebra::not(and3(a, b)),
            or3(algebra::not(a), algebra::not(b))
        );
        prop_assert_eq!(
            algebra::not(or3(a, b)),
            and3(algebra::not(a), algebra::not(b))
        );
    }
}

// ============================================================================
// Condition trees
// ============================================================================

proptest! {
    #[test]
    fn tree_negation_matches_algebra(policy in arb_policy(), ctx in arb_request()) {
        let direct = policy.permits_collective(&ctx);
        let negated = not(policy.clone()).permits_collective(&ctx);
        prop_assert_eq!(negated, algebra::not(direct));

        let twice = not(not(policy.clone())).permits_instance(&ctx, &());
        prop_assert_eq!(twice, policy.permits_instance(&ctx, &()));
    }

    #[test]
    fn tree_de_morgan_holds_for_builtin_leaves(
        a in arb_definite_policy(),
        b in arb_definite_policy(),
        ctx in arb_request(),
    ) {
        let lhs = not(and(a.clone(), b.clone())).permits_collective(&ctx);
        let rhs = or(not(a.clone()), not(b.clone())).permits_collective(&ctx);
        prop_assert_eq!(lhs, rhs);

        let lhs = not(or(a.clone(), b.clone())).permits_instance(&ctx, &());
        let rhs = and(not(a), not(b)).permits_instance(&ctx, &());
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn builtin_trees_never_abstain(policy in arb_definite_policy(), ctx in arb_request()) {
        prop_assert!(!policy.permits_collective(&ctx).is_abstain());
        prop_assert!(!policy.permits_instance(&ctx, &()).is_abstain());
    }

    #[test]
    fn abstaining_operand_is_transparent(policy in arb_policy(), ctx in arb_request()) {
        let expected = policy.permits_collective(&ctx);
        let abstain = fixed(TriState::Abstain);
        prop_assert_eq!(and(abstain.clone(), policy.clone()).permits_collective(&ctx), expected);
        prop_assert_eq!(and(policy.clone(), abstain.clone()).permits_collective(&ctx), expected);
        prop_assert_eq!(or(abstain.clone(), policy.clone()).permits_collective(&ctx), expected);
        prop_assert_eq!(or(policy, abstain).permits_collective(&ctx), expected);
    }

    #[test]
    fn determining_left_operand_never_evaluates_right(ctx in arb_request()) {
        prop_assert_eq!(
            and(fixed(TriState::Deny), tripwire()).permits_collective(&ctx),
            TriState::Deny
        );
        prop_assert_eq!(
            or(fixed(TriState::Permit), tripwire()).permits_instance(&ctx, &()),
            TriState::Permit
        );
    }

    #[test]
    fn boundary_permits_only_on_permit(policy in arb_policy(), ctx in arb_request()) {
        prop_assert_eq!(
            has_permission(Some(&policy), &ctx),
            policy.permits_collective(&ctx) == TriState::Permit
        );
        prop_assert_eq!(
            has_object_permission(Some(&policy), &ctx, &()),
            policy.permits_instance(&ctx, &()) == TriState::Permit
        );
    }

    #[test]
    fn composing_leaves_operand_labels_untouched(a in arb_policy(), b in arb_policy()) {
        let before = (a.label().into_owned(), b.label().into_owned());
        let mut combined = and(a.clone(), b.clone());
        combined |= not(a.clone());
        prop_assert!(combined.as_composite().is_some());
        prop_assert_eq!(a.label().into_owned(), before.0);
        prop_assert_eq!(b.label().into_owned(), before.1);
    }
}
