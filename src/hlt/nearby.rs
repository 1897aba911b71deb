use crate::hlt::entity::{EntityId, EntityRef, Kind, Ship};

/// Entities that sit at exactly the same distance from the reference ship.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceBucket<'a> {
    pub distance: f64,
    pub entities: Vec<EntityRef<'a>>,
}

impl<'a> DistanceBucket<'a> {
    /// First entity of kind `T` in this bucket accepted by `pred`.
    pub fn first_of<T: Kind>(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&'a T> {
        self.entities
            .iter()
            .filter_map(|entity| T::narrow(*entity))
            .find(|candidate| pred(*candidate))
    }

    pub fn first_matching(
        &self,
        mut pred: impl FnMut(&EntityRef<'a>) -> bool,
    ) -> Option<EntityRef<'a>> {
        self.entities.iter().copied().find(|entity| pred(entity))
    }
}

/// Distance index around one ship: buckets ascend by distance, and entities
/// inside a bucket follow [`EntityId`] order so equal distances resolve
/// deterministically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NearbyEntities<'a> {
    buckets: Vec<DistanceBucket<'a>>,
}

impl<'a> NearbyEntities<'a> {
    pub fn around(ship: &Ship, entities: impl IntoIterator<Item = EntityRef<'a>>) -> Self {
        let own_id = EntityId::Ship(ship.id);
        let mut measured: Vec<(f64, EntityRef<'a>)> = entities
            .into_iter()
            .filter(|entity| entity.id() != own_id)
            .map(|entity| (ship.position.distance_to(&entity.position()), entity))
            .collect();
        measured.sort_by(|(da, a), (db, b)| {
            da.total_cmp(db).then_with(|| a.id().cmp(&b.id()))
        });

        let mut buckets: Vec<DistanceBucket<'a>> = Vec::new();
        for (distance, entity) in measured {
            match buckets.last_mut() {
                Some(bucket) if bucket.distance == distance => bucket.entities.push(entity),
                _ => buckets.push(DistanceBucket {
                    distance,
                    entities: vec![entity],
                }),
            }
        }

        Self { buckets }
    }

    pub fn buckets(&self) -> &[DistanceBucket<'a>] {
        &self.buckets
    }

    /// Nearest entity of kind `T` accepted by `pred`, with its distance.
    pub fn nearest<T: Kind>(&self, mut pred: impl FnMut(&T) -> bool) -> Option<(f64, &'a T)> {
        self.buckets.iter().find_map(|bucket| {
            bucket
                .first_of::<T>(&mut pred)
                .map(|found| (bucket.distance, found))
        })
    }

    pub fn nearest_matching(
        &self,
        mut pred: impl FnMut(&EntityRef<'a>) -> bool,
    ) -> Option<(f64, EntityRef<'a>)> {
        self.buckets.iter().find_map(|bucket| {
            bucket
                .first_matching(&mut pred)
                .map(|found| (bucket.distance, found))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::entity::{DockingStatus, Planet, Position};

    fn ship(id: u32, owner: u32, x: f64, y: f64) -> Ship {
        Ship {
            id,
            owner,
            position: Position::new(x, y),
            health: 255,
            velocity: Position::new(0.0, 0.0),
            docking_status: DockingStatus::Undocked,
            docked_planet: None,
            docking_progress: 0,
            weapon_cooldown: 0,
        }
    }

    fn planet(id: u32, x: f64, y: f64) -> Planet {
        Planet {
            id,
            position: Position::new(x, y),
            health: 1000,
            radius: 3.0,
            docking_spots: 2,
            current_production: 0,
            remaining_resources: 1000,
            owner: None,
            docked_ships: Vec::new(),
        }
    }

    #[test]
    fn buckets_ascend_and_exclude_the_reference_ship() {
        let me = ship(0, 0, 0.0, 0.0);
        let far = planet(1, 30.0, 0.0);
        let near = ship(5, 1, 10.0, 0.0);
        let entities = vec![
            EntityRef::Ship(&me),
            EntityRef::Planet(&far),
            EntityRef::Ship(&near),
        ];

        let nearby = NearbyEntities::around(&me, entities);
        let distances: Vec<f64> = nearby.buckets().iter().map(|b| b.distance).collect();
        assert_eq!(distances, vec![10.0, 30.0]);
    }

    #[test]
    fn equidistant_entities_share_a_bucket_in_id_order() {
        let me = ship(0, 0, 0.0, 0.0);
        let east = planet(4, 10.0, 0.0);
        let north = planet(2, 0.0, 10.0);
        let west = ship(9, 1, -10.0, 0.0);
        let entities = vec![
            EntityRef::Planet(&east),
            EntityRef::Planet(&north),
            EntityRef::Ship(&west),
        ];

        let nearby = NearbyEntities::around(&me, entities);
        assert_eq!(nearby.buckets().len(), 1);
        let bucket = &nearby.buckets()[0];
        let ids: Vec<EntityId> = bucket.entities.iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            vec![EntityId::Ship(9), EntityId::Planet(2), EntityId::Planet(4)]
        );
        let (_, first_planet) = nearby.nearest::<Planet>(|_| true).expect("planet");
        assert_eq!(first_planet.id, 2);
    }

    #[test]
    fn nearest_of_kind_skips_other_kinds_and_rejected_candidates() {
        let me = ship(0, 0, 0.0, 0.0);
        let friend = ship(1, 0, 2.0, 0.0);
        let home = planet(3, 5.0, 0.0);
        let enemy = ship(7, 1, 20.0, 0.0);
        let entities = vec![
            EntityRef::Ship(&friend),
            EntityRef::Planet(&home),
            EntityRef::Ship(&enemy),
        ];

        let nearby = NearbyEntities::around(&me, entities);
        let (distance, target) = nearby
            .nearest::<Ship>(|candidate| candidate.owner != 0)
            .expect("enemy ship");
        assert_eq!(target.id, 7);
        assert_eq!(distance, 20.0);
        assert!(nearby.nearest::<Ship>(|s| s.owner == 5).is_none());
    }
}
