// A monoid has an `empty` value and an associative way to append two values,
// with `empty` as identity on both sides. Writer logs are monoids.
pub trait Monoid {
    fn mempty() -> Self;
    fn mappend(&self, other: &Self) -> Self;
}


// containers, in general, are monoids

// strings
impl Monoid for String {
    fn mempty() -> Self { String::new() }
    fn mappend(&self, other: &Self) -> Self { format!("{}{}", self, other) }
}

// lists
impl<A: Clone> Monoid for Vec<A> {
    fn mempty() -> Self { vec![] }
    fn mappend(&self, other: &Self) -> Self {
        let mut ret: Self = Vec::with_capacity(self.len() + other.len());
        ret.extend_from_slice(self);
        ret.extend_from_slice(other);
        ret
    }
}


// tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let s = "log".to_string();
        assert_eq!(s.mappend(&String::mempty()), s);
        assert_eq!(String::mempty().mappend(&s), s);
        assert_eq!(vec![1, 2].mappend(&Vec::mempty()), vec![1, 2]);
    }

    #[test]
    fn test_append() {
        assert_eq!("ab".to_string().mappend(&"cd".to_string()), "abcd");
        assert_eq!(vec!["a"].mappend(&vec!["b", "c"]), vec!["a", "b", "c"]);
    }
}
