//! Staging writes of every scalar type into pending lists.

use spmx::prelude::*;
use spmx::stage::{set_element, set_typed};
use spmx_test_utils::fixtures::sample_bytes;
use spmx_test_utils::FailingAlloc;

#[test]
fn every_builtin_input_stages_into_every_builtin_list() {
    for dst in TypeCode::BUILTINS {
        let layout = PendingLayout::matrix(ScalarType::Builtin(dst));
        let mut pending = PendingHandle::new();
        for (k, src) in TypeCode::BUILTINS.into_iter().enumerate() {
            let scalar = sample_bytes(src);
            set_element(
                &mut pending,
                layout,
                k as Index,
                Some(0),
                &scalar,
                ScalarType::Builtin(src),
            )
            .unwrap();
        }
        let list = pending.get().unwrap();
        assert_eq!(list.len(), TypeCode::BUILTIN_COUNT);
        assert!(list.is_sorted());
        assert!(list.iter().all(|t| t.value.len() == dst.size().unwrap()));
    }
}

#[test]
fn known_values_after_staging() {
    let layout = PendingLayout::vector(ScalarType::Builtin(TypeCode::Int32));
    let mut pending = PendingHandle::new();
    set_typed(&mut pending, layout, 0, None, 3.9f64).unwrap();
    set_typed(&mut pending, layout, 1, None, -3.9f32).unwrap();
    set_typed(&mut pending, layout, 2, None, u64::MAX).unwrap();

    let list = pending.get().unwrap();
    let values: Vec<i32> = list.iter().map(|t| i32::read(t.value)).collect();
    assert_eq!(values, vec![3, -3, -1]);
}

#[test]
fn bool_list_coerces_nonzero() {
    let layout = PendingLayout::vector(ScalarType::Builtin(TypeCode::Bool));
    let mut pending = PendingHandle::new();
    set_typed(&mut pending, layout, 0, None, 0u16).unwrap();
    set_typed(&mut pending, layout, 1, None, 9u16).unwrap();
    set_typed(&mut pending, layout, 2, None, false).unwrap();

    let list = pending.get().unwrap();
    let values: Vec<bool> = list.iter().map(|t| bool::read(t.value)).collect();
    assert_eq!(values, vec![false, true, false]);
}

#[test]
fn growth_failure_while_staging_leaves_handle_absent() {
    let layout = PendingLayout::matrix(ScalarType::Builtin(TypeCode::Fp32));
    let mut pending = PendingHandle::with_alloc(FailingAlloc::new())
        .with_config(spmx::pending::PendingConfig { initial_capacity: 2 });
    set_typed(&mut pending, layout, 0, Some(0), 1.0f32).unwrap();
    set_typed(&mut pending, layout, 1, Some(0), 2.0f32).unwrap();

    // The third write needs growth; fail the value buffer.
    pending.allocator_mut().arm(2);
    let err = set_typed(&mut pending, layout, 2, Some(0), 3.0f32).unwrap_err();
    assert!(matches!(
        err,
        spmx::stage::StageError::Pending(PendingError::OutOfMemory {
            requested: 4,
            capacity: 2
        })
    ));
    assert!(!pending.is_present());
    assert_eq!(pending.len(), 0);

    // The next write starts a fresh list.
    set_typed(&mut pending, layout, 7, Some(7), 7.0f32).unwrap();
    assert_eq!(pending.len(), 1);
}

#[test]
fn unused_operand_cast_is_harmless() {
    // An operator that ignores its second input still casts it.
    let f = cast_factory(TypeCode::Fc64, TypeCode::Uct);
    let mut scratch = [0u8; 16];
    f(&mut scratch, &[0u8; 16], 16);
    let g = cast_factory(TypeCode::Bool, TypeCode::Fc64);
    g(&mut scratch, &[0xffu8; 16], 1);
}
