use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::derived::{ApFromBind, BindFromMapJoin, JoinFromBind, MapFromBind, Resolved};
use crate::error::{InvalidDefinition, Result};
use crate::kind::Kind;
use crate::monad::Monad;
use crate::ops::{Absent, Ap, Bind, Join, Map, Op, Point};


/// Which slots a definition holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Supplied {
    pub point: bool,
    pub bind: bool,
    pub map: bool,
    pub join: bool,
    pub ap: bool,
}

impl Supplied {
    // point + (bind | map + join)
    pub fn is_minimal(&self) -> bool {
        self.point && (self.bind || (self.map && self.join))
    }

    pub fn ops(&self) -> Vec<Op> {
        [
            (self.point, Op::Point),
            (self.bind, Op::Bind),
            (self.map, Op::Map),
            (self.join, Op::Join),
            (self.ap, Op::Ap),
        ]
        .into_iter()
        .filter_map(|(present, op)| present.then_some(op))
        .collect()
    }
}

impl fmt::Display for Supplied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.ops().iter().map(|op| op.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}


/// A partial monad definition over the kind `K`.
///
/// Start from `Definition::<K>::new()` and fill slots with the `with_*`
/// methods; each slot's type changes from `Absent` to whatever was supplied.
/// `build` validates the set once and derives everything that is missing.
pub struct Definition<K, P = Absent, B = Absent, M = Absent, J = Absent, A = Absent> {
    point: Option<P>,
    bind: Option<B>,
    map: Option<M>,
    join: Option<J>,
    ap: Option<A>,
    _kind: PhantomData<K>,
}

impl<K: Kind> Definition<K> {
    pub fn new() -> Self {
        Definition { point: None, bind: None, map: None, join: None, ap: None, _kind: PhantomData }
    }
}

impl<K: Kind> Default for Definition<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind, P, B, M, J, A> Definition<K, P, B, M, J, A> {
    pub fn with_point<P2: Point<K>>(self, point: P2) -> Definition<K, P2, B, M, J, A> {
        Definition { point: Some(point), bind: self.bind, map: self.map, join: self.join, ap: self.ap, _kind: PhantomData }
    }

    pub fn with_bind<B2: Bind<K>>(self, bind: B2) -> Definition<K, P, B2, M, J, A> {
        Definition { point: self.point, bind: Some(bind), map: self.map, join: self.join, ap: self.ap, _kind: PhantomData }
    }

    pub fn with_map<M2: Map<K>>(self, map: M2) -> Definition<K, P, B, M2, J, A> {
        Definition { point: self.point, bind: self.bind, map: Some(map), join: self.join, ap: self.ap, _kind: PhantomData }
    }

    pub fn with_join<J2: Join<K>>(self, join: J2) -> Definition<K, P, B, M, J2, A> {
        Definition { point: self.point, bind: self.bind, map: self.map, join: Some(join), ap: self.ap, _kind: PhantomData }
    }

    pub fn with_ap<A2: Ap<K>>(self, ap: A2) -> Definition<K, P, B, M, J, A2> {
        Definition { point: self.point, bind: self.bind, map: self.map, join: self.join, ap: Some(ap), _kind: PhantomData }
    }

    pub fn supplied(&self) -> Supplied {
        Supplied {
            point: self.point.is_some(),
            bind: self.bind.is_some(),
            map: self.map.is_some(),
            join: self.join.is_some(),
            ap: self.ap.is_some(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let supplied = self.supplied();
        if supplied.is_minimal() {
            Ok(())
        } else {
            Err(InvalidDefinition { supplied })
        }
    }

    /// Validates the definition and fills every missing slot.
    ///
    /// `bind`, `map` and `join` are resolved first and only ever reference
    /// supplied operations; `ap` is then derived from the resolved pair.
    pub fn build(self) -> Result<Monad<K, P, B, M, J, A>>
    where
        P: Clone,
        B: Clone,
        M: Clone,
        J: Clone,
    {
        let supplied = self.supplied();
        if let Err(err) = self.validate() {
            debug!(%supplied, "monad definition rejected");
            return Err(err);
        }
        let ungrounded = || InvalidDefinition { supplied };

        let point = self.point.ok_or_else(ungrounded)?;

        let bind = match (&self.bind, &self.map, &self.join) {
            (Some(bind), _, _) => Resolved::Given(bind.clone()),
            (None, Some(map), Some(join)) => Resolved::Derived(BindFromMapJoin::new(map.clone(), join.clone())),
            _ => return Err(ungrounded()),
        };

        let map = match (self.map, &self.bind) {
            (Some(map), _) => Resolved::Given(map),
            (None, Some(bind)) => Resolved::Derived(MapFromBind::new(point.clone(), bind.clone())),
            (None, None) => return Err(ungrounded()),
        };

        let join = match (self.join, self.bind) {
            (Some(join), _) => Resolved::Given(join),
            (None, Some(bind)) => Resolved::Derived(JoinFromBind::new(bind)),
            (None, None) => return Err(ungrounded()),
        };

        let ap = match self.ap {
            Some(ap) => Resolved::Given(ap),
            None => Resolved::Derived(ApFromBind::new(bind.clone(), map.clone())),
        };

        let monad = Monad::from_slots(point, bind, map, join, ap);
        debug!(%supplied, derived = ?monad.derived(), "monad definition resolved");
        Ok(monad)
    }
}
