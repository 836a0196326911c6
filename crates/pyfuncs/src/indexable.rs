use std::collections::VecDeque;

/// An ordered collection with constant-time lookup by position.
pub trait Indexable {
    type Output: ?Sized;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics when `index` is out of bounds, like `[]` does.
    fn at(&self, index: usize) -> &Self::Output;
}

impl<T> Indexable for [T] {
    type Output = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[track_caller]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    type Output = T;

    fn len(&self) -> usize {
        N
    }

    #[track_caller]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexable for Vec<T> {
    type Output = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[track_caller]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexable for Box<[T]> {
    type Output = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[track_caller]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> Indexable for VecDeque<T> {
    type Output = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[track_caller]
    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

/// A fixed-arity tuple of borrowed containers that can be walked in
/// lockstep.
///
/// Implemented for `(&A,)`, `(&A, &B)` and so on up to twelve containers.
/// Each position of [`Sources::Item`] borrows the element type of the
/// container at the same position.
pub trait Sources: Copy {
    type Item;

    const ARITY: usize;

    /// Length of the shortest container.
    fn min_len(&self) -> usize;

    /// Whether every container has the same length.
    fn same_len(&self) -> bool;

    /// Looks `index` up in each container, in declared order.
    fn fetch(&self, index: usize) -> Self::Item;
}

macro_rules! impl_sources {
    ($first:ident $first_idx:tt $(, $name:ident $idx:tt)*) => {
        impl<'a, $first $(, $name)*> Sources for (&'a $first, $(&'a $name,)*)
        where
            $first: Indexable + ?Sized,
            $($name: Indexable + ?Sized,)*
        {
            type Item = (&'a $first::Output, $(&'a $name::Output,)*);

            const ARITY: usize = <[usize]>::len(&[$first_idx $(, $idx)*]);

            fn min_len(&self) -> usize {
                [self.$first_idx.len() $(, self.$idx.len())*]
                    .into_iter()
                    .min()
                    .unwrap_or_default()
            }

            fn same_len(&self) -> bool {
                let lens = [self.$first_idx.len() $(, self.$idx.len())*];
                lens.iter().all(|&len| len == lens[0])
            }

            #[track_caller]
            fn fetch(&self, index: usize) -> Self::Item {
                (self.$first_idx.at(index), $(self.$idx.at(index),)*)
            }
        }
    };
}

impl_sources!(A 0);
impl_sources!(A 0, B 1);
impl_sources!(A 0, B 1, C 2);
impl_sources!(A 0, B 1, C 2, D 3);
impl_sources!(A 0, B 1, C 2, D 3, E 4);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10);
impl_sources!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11);
