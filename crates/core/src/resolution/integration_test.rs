//! Integration tests for the resolution core

#[cfg(test)]
mod tests {
    use crate::errors::CoreError;
    use crate::resolution::{
        ConcreteType, ConstructionStrategy, DependencyDescriptor, DependencyResolver,
        Instantiator, ResolverChain, TableResolver, TypeKey, TypeRelations, TypeToken,
    };

    // Test type hierarchy
    trait Component: Send + Sync {}

    struct Widget;
    struct Gadget;
    struct WidgetFactory;

    impl Component for Widget {}
    impl Component for Gadget {}

    #[test]
    fn test_chain_resolution_then_validated_binding() {
        // container wiring: resolvers first, then binding validation
        let chain = ResolverChain::new()
            .with(TableResolver::new())
            .with(
                TableResolver::new()
                    .bind::<dyn Component, Widget>()
                    .bind_qualified::<dyn Component, Gadget>("backup"),
            );

        let concrete = chain
            .resolve(&DependencyDescriptor::of::<dyn Component>())
            .unwrap();
        assert_eq!(concrete, ConcreteType::of::<Widget>());

        let mut relations = TypeRelations::new();
        relations.record::<Widget, dyn Component>();

        let strategy = ConstructionStrategy::constructor::<Widget>(vec![]);
        let instantiator =
            Instantiator::bind(TypeKey::of::<dyn Component>(), strategy, &relations).unwrap();

        assert!(instantiator.target().is::<dyn Component>());
        assert!(instantiator.effective_return_type().is::<Widget>());
    }

    #[test]
    fn test_make_widget_factory_scenario() {
        // register strategy make_widget(): Widget
        let relations = TypeRelations::new();
        let strategy = ConstructionStrategy::factory::<WidgetFactory>(
            "make_widget",
            vec![],
            TypeToken::simple::<Widget>(),
        );

        // validator construction for target Widget succeeds
        let instantiator =
            Instantiator::bind(TypeKey::of::<Widget>(), strategy.clone(), &relations).unwrap();
        assert_eq!(instantiator.strategy().name(), "make_widget");

        // for target Gadget it fails, naming both types and the strategy
        let err = Instantiator::bind(TypeKey::of::<Gadget>(), strategy, &relations).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Widget"));
        assert!(message.contains("Gadget"));
        assert!(message.contains("make_widget"));
        assert!(matches!(err, CoreError::InvalidBinding { .. }));
    }

    #[test]
    fn test_unbound_descriptor_stays_a_negative_result() {
        // an unresolvable dependency is a normal None, never a panic
        let chain = ResolverChain::new().with(TableResolver::new().bind::<dyn Component, Widget>());

        let unknown = DependencyDescriptor::qualified::<dyn Component>("exotic");
        assert_eq!(chain.resolve(&unknown), None);
        assert_eq!(chain.resolve(&unknown), None);
    }

    #[test]
    fn test_qualified_resolution_selects_alternate_implementation() {
        let resolver = TableResolver::new()
            .bind::<dyn Component, Widget>()
            .bind_qualified::<dyn Component, Gadget>("backup");

        let backup = resolver
            .resolve(&DependencyDescriptor::qualified::<dyn Component>("backup"))
            .unwrap();
        assert_eq!(backup, ConcreteType::of::<Gadget>());
    }
}
