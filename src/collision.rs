//! Collision detection for the moving objects of the arena.
//!
//! Every moving object is treated as a circle whose radius is half its sprite
//! width. Circles are cheap to test, don't care about rotation (ships and
//! meteors spin), and are stable frame to frame.
//!
//! # Architecture
//!
//! - `Collidable` trait: implemented by anything with a center and a radius
//! - `circles_overlap`: pure function, strict overlap test
//! - `colliding_pairs`: all overlapping index pairs in a slice
use crate::vector::Vector2D;

pub trait Collidable {
    fn center(&self) -> Vector2D;

    fn radius(&self) -> f64;
}

/// True when the two circles overlap.
///
/// Touching circles (distance exactly equal to the sum of radii) do not
/// collide.
pub fn circles_overlap(a_center: Vector2D, a_radius: f64, b_center: Vector2D, b_radius: f64) -> bool {
    a_center.distance(b_center) < a_radius + b_radius
}

pub fn collides<A: Collidable + ?Sized, B: Collidable + ?Sized>(a: &A, b: &B) -> bool {
    circles_overlap(a.center(), a.radius(), b.center(), b.radius())
}

/// Returns every `(i, j)` with `i < j` whose bounds overlap.
pub fn colliding_pairs<T: Collidable>(entities: &[T]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            if collides(&entities[i], &entities[j]) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Circle {
        center: Vector2D,
        radius: f64,
    }

    impl Collidable for Circle {
        fn center(&self) -> Vector2D {
            self.center
        }

        fn radius(&self) -> f64 {
            self.radius
        }
    }

    fn circle(x: f64, y: f64, radius: f64) -> Circle {
        Circle {
            center: Vector2D::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_overlapping_circles_collide() {
        assert!(collides(&circle(0.0, 0.0, 10.0), &circle(15.0, 0.0, 10.0)));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        assert!(!collides(&circle(0.0, 0.0, 10.0), &circle(20.0, 0.0, 10.0)));
    }

    #[test]
    fn test_contained_circle_collides() {
        assert!(collides(&circle(0.0, 0.0, 50.0), &circle(5.0, 5.0, 2.0)));
    }

    #[test]
    fn test_colliding_pairs_lists_each_pair_once() {
        let circles = vec![
            circle(0.0, 0.0, 10.0),
            circle(5.0, 0.0, 10.0),
            circle(500.0, 500.0, 10.0),
            circle(10.0, 0.0, 10.0),
        ];

        assert_eq!(colliding_pairs(&circles), vec![(0, 1), (0, 3), (1, 3)]);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -1000.0f64..1000.0, ay in -1000.0f64..1000.0, ar in 0.0f64..200.0,
            bx in -1000.0f64..1000.0, by in -1000.0f64..1000.0, br in 0.0f64..200.0,
        ) {
            let a = circle(ax, ay, ar);
            let b = circle(bx, by, br);
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }

        #[test]
        fn prop_far_apart_never_collide(
            x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
            ar in 0.0f64..100.0, br in 0.0f64..100.0, gap in 1.0f64..500.0,
        ) {
            let a = circle(x, y, ar);
            let b = circle(x + ar + br + gap, y, br);
            prop_assert!(!collides(&a, &b));
        }

        #[test]
        fn prop_same_center_positive_radius_collides(
            x in -1000.0f64..1000.0, y in -1000.0f64..1000.0, r in 0.1f64..100.0,
        ) {
            prop_assert!(collides(&circle(x, y, r), &circle(x, y, r)));
        }
    }
}
