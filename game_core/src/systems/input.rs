use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply queued paddle inputs to the matching players' intents
pub fn ingest_intents(world: &mut World, queue: &mut IntentQueue) {
    for (player_id, dir) in queue.pop_intents() {
        let mut found = false;
        for (_entity, (player, intent)) in world.query_mut::<(&Player, &mut PaddleIntent)>() {
            if player.id == player_id {
                // Anything beyond one step per frame is treated as full speed
                intent.dir = dir.signum();
                found = true;
                break;
            }
        }

        if !found {
            log::warn!("Dropping input for unknown player {}", player_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_player;
    use glam::DVec2;

    #[test]
    fn test_ingest_sets_intent_for_matching_player() {
        let mut world = World::new();
        let p1 = create_player(&mut world, Player::new("P1", DVec2::ZERO, DVec2::ONE));
        let p2 = create_player(&mut world, Player::new("P2", DVec2::ZERO, DVec2::ONE));

        let mut queue = IntentQueue::new();
        queue.push_intent("P2", 5);
        queue.push_intent("Nobody", -1);
        ingest_intents(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(p1).unwrap().dir, 0);
        assert_eq!(world.get::<&PaddleIntent>(p2).unwrap().dir, 1, "Direction is clamped");
        assert!(queue.intents.is_empty(), "Queue is drained");
    }
}
