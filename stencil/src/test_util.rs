use crate::Float;

use ndarray as nd;

/// Element-wise closeness check, run when the value is dropped so tolerances can be chained on.
pub struct AllCloseAssertion<'a, D: nd::Dimension> {
    left: nd::ArrayView<'a, Float, D>,
    right: nd::ArrayView<'a, Float, D>,

    rel_tol: Option<Float>,
    abs_tol: Option<Float>,
}
impl<D: nd::Dimension> AllCloseAssertion<'_, D> {
    pub fn rel_tol(&mut self, rel_tol: Option<Float>) -> &mut Self {
        self.rel_tol = rel_tol;
        self
    }

    pub fn abs_tol(&mut self, abs_tol: Option<Float>) -> &mut Self {
        self.abs_tol = abs_tol;
        self
    }
}

impl<D: nd::Dimension> Drop for AllCloseAssertion<'_, D> {
    #[track_caller]
    fn drop(&mut self) {
        if self.rel_tol.is_none() && self.abs_tol.is_none() {
            panic!("At least one tolerance must be specified");
        }
        assert_eq!(
            self.left.shape(),
            self.right.shape(),
            "Compared arrays differ in shape"
        );
        let mut num_failures = 0;
        self.left
            .indexed_iter()
            .zip(self.right.iter())
            .for_each(|((index, left), right)| {
                let mut checker = approx::Relative::default();
                if let Some(rel_tol) = self.rel_tol {
                    checker = checker.max_relative(rel_tol);
                }
                if let Some(abs_tol) = self.abs_tol {
                    checker = checker.epsilon(abs_tol);
                }

                if !checker.eq(left, right) {
                    if num_failures < 20 {
                        eprintln!("At {index:?}, left = {left}, right = {right}");
                    }
                    num_failures += 1;
                }
            });
        if num_failures > 0 {
            panic!(
                "Didn't match at {num_failures}/{} elements",
                self.left.len()
            )
        }
    }
}

#[track_caller]
pub fn assert_all_close<'a, S: nd::Data<Elem = Float>, T: nd::Data<Elem = Float>, D: nd::Dimension>(
    left: &'a nd::ArrayBase<S, D>,
    right: &'a nd::ArrayBase<T, D>,
) -> AllCloseAssertion<'a, D> {
    AllCloseAssertion {
        left: left.view(),
        right: right.view(),
        rel_tol: Some(1e-7),
        abs_tol: Some(0.),
    }
}
