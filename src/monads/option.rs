use crate::builder::Definition;
use crate::error::Result;
use crate::kind::{Element, Kind, Kleisli};
use crate::monad::Monad;
use crate::ops::{Absent, Bind, Point};


pub struct OptionKind;

impl Kind for OptionKind {
    type Of<Ta: Element> = Option<Ta>;
}


// Given by point and bind alone; map, join and ap are derived.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOps;

impl Point<OptionKind> for OptionOps {
    fn point<Ta: Element>(&self, a: Ta) -> Option<Ta> {
        Some(a)
    }
}

impl Bind<OptionKind> for OptionOps {
    fn bind<Ta: Element, Tb: Element>(&self, ma: Option<Ta>, k_ab: Kleisli<OptionKind, Ta, Tb>) -> Option<Tb> {
        match ma {
            Some(a) => k_ab.run(a),
            None => None,
        }
    }
}


pub type OptionMonad = Monad<OptionKind, OptionOps, OptionOps, Absent, Absent, Absent>;

pub fn option_monad() -> Result<OptionMonad> {
    Definition::<OptionKind>::new()
        .with_point(OptionOps)
        .with_bind(OptionOps)
        .build()
}


// tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::func;
    use crate::monad_do;
    use crate::ops::Op;

    fn safe_div(x: i64, y: i64) -> Option<i64> {
        if y == 0 { None } else { Some(x / y) }
    }

    #[test]
    fn test_derived_ops() {
        let m = option_monad().unwrap();
        assert_eq!(m.derived(), vec![Op::Map, Op::Join, Op::Ap, Op::LiftA2]);
    }

    #[test]
    fn test_fmap() {
        let m = option_monad().unwrap();
        assert_eq!(m.map(Some(3), func(|x: i64| x + 1)), Some(4));
        assert_eq!(m.map(None, func(|x: i64| x + 1)), None);
    }

    #[test]
    fn test_lift_a2() {
        let m = option_monad().unwrap();
        let add = func(|x: i64| func(move |y: i64| x + y));
        assert_eq!(m.lift_a2(Some(3), Some(4), add.clone()), Some(7));
        assert_eq!(m.lift_a2(Some(3), None, add.clone()), None);
        assert_eq!(m.lift_a2(None, Some(4), add), None);
    }

    #[test]
    fn test_do() {
        let m = option_monad().unwrap();
        let calc = |a: i64, b: i64, c: i64| monad_do!(m;
            x <- safe_div(a, b),
            y <- safe_div(x, c),
            m.point(x + y)
        );
        assert_eq!(calc(100, 5, 2), Some(30));
        assert_eq!(calc(100, 0, 2), None);
        assert_eq!(calc(100, 5, 0), None);
    }
}
