use crate::DieValue;

impl quickcheck::Arbitrary for DieValue {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&DieValue::ALL).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let value = self.get();
        Box::new((DieValue::MIN..value).filter_map(DieValue::new))
    }
}
