pub mod test_functor;
