use mentoria_config::Config;
use mentoria_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use mentoria_extern_impl::delivery::{DeliveryApiServiceConfig, DeliveryApiServiceImpl};

pub mod contact;
pub mod serve;

fn contact_service(config: &Config) -> ContactFeatureServiceImpl<DeliveryApiServiceImpl> {
    let delivery_api = DeliveryApiServiceImpl::new(DeliveryApiServiceConfig::new(
        config.delivery.endpoint_override.clone(),
        config.delivery.api_key.clone(),
    ));

    ContactFeatureServiceImpl::new(
        delivery_api,
        ContactFeatureConfig {
            from: config.contact.from.as_str().into(),
            to: config.contact.to.as_str().into(),
            subject: config.contact.subject.as_str().into(),
        },
    )
}
