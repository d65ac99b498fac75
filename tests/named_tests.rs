// tests/named_tests.rs
//
// The position / color / texture names are alternate views of the same
// storage slots, not copies.

use veclite::prelude::*;

#[test]
fn aliases_share_slots_4d() {
    let v = vec4(1, 2, 3, 4);
    // slot 0
    assert_eq!(v.x(), 1);
    assert_eq!(v.r(), 1);
    assert_eq!(v.s(), 1);
    // slot 3
    assert_eq!(v.w(), 4);
    assert_eq!(v.a(), 4);
    assert_eq!(v.q(), 4);
}

#[test]
fn write_through_one_name_is_visible_through_all() {
    let mut v = vec4(1, 2, 3, 4);
    *v.x_mut() = 42;
    assert_eq!(v.r(), 42);
    assert_eq!(v.s(), 42);
    assert_eq!(v[0], 42);

    *v.a_mut() = -7;
    assert_eq!(v.w(), -7);
    assert_eq!(v.q(), -7);
    assert_eq!(v[3], -7);
}

#[test]
fn aliases_2d() {
    let mut v = vec2(10, 20);
    assert_eq!((v.x(), v.y()), (10, 20));
    assert_eq!((v.a(), v.b()), (10, 20));
    assert_eq!((v.s(), v.t()), (10, 20));

    *v.t_mut() = 99;
    assert_eq!(v.y(), 99);
    assert_eq!(v.b(), 99);
}

#[test]
fn aliases_3d() {
    let v = vec3(7, 8, 9);
    assert_eq!((v.x(), v.y(), v.z()), (7, 8, 9));
    assert_eq!((v.r(), v.g(), v.b()), (7, 8, 9));
    assert_eq!((v.s(), v.t(), v.p()), (7, 8, 9));
}

#[test]
fn constructors_fill_in_order() {
    assert_eq!(vec2(1, 2).data, [1, 2]);
    assert_eq!(vec3(1, 2, 3).data, [1, 2, 3]);
    assert_eq!(vec4(1, 2, 3, 4).data, [1, 2, 3, 4]);
}
