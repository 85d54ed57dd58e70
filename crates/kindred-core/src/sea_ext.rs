use sea_orm::{ColumnTrait, EntityTrait, QueryOrder, Select};

/// Ordering for "display order" columns: ascending position, ties broken by a
/// second column (normally the auto-increment primary key, i.e. insertion order).
pub trait OrderByPosition {
    fn order_by_position<C>(self, position: C, tie_breaker: C) -> Self
    where
        C: ColumnTrait;
}

impl<E> OrderByPosition for Select<E>
where
    E: EntityTrait,
{
    fn order_by_position<C>(self, position: C, tie_breaker: C) -> Self
    where
        C: ColumnTrait,
    {
        self.order_by_asc(position).order_by_asc(tie_breaker)
    }
}
